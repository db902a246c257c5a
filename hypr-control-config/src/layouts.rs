//! Keyboard layouts offered in the layout picker.

/// XKB layout codes with their display names, in picker order.
pub const LAYOUTS: &[(&str, &str)] = &[
    ("us", "United States"),
    ("gb", "United Kingdom"),
    ("de", "German"),
    ("fr", "French"),
    ("es", "Spanish"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("br", "Brazilian"),
    ("ru", "Russian"),
    ("ua", "Ukrainian"),
    ("pl", "Polish"),
    ("cz", "Czech"),
    ("sk", "Slovak"),
    ("hu", "Hungarian"),
    ("ro", "Romanian"),
    ("bg", "Bulgarian"),
    ("hr", "Croatian"),
    ("si", "Slovenian"),
    ("rs", "Serbian"),
    ("mk", "Macedonian"),
    ("gr", "Greek"),
    ("tr", "Turkish"),
    ("il", "Hebrew"),
    ("ara", "Arabic"),
    ("ir", "Persian"),
    ("iq", "Iraqi"),
    ("sy", "Syrian"),
    ("eg", "Egyptian"),
    ("ma", "Moroccan"),
    ("dz", "Algerian"),
    ("in", "Indian"),
    ("jp", "Japanese"),
    ("kr", "Korean"),
    ("cn", "Chinese"),
    ("tw", "Taiwanese"),
    ("th", "Thai"),
    ("vn", "Vietnamese"),
    ("id", "Indonesian"),
    ("my", "Malaysian"),
    ("ph", "Filipino"),
    ("pk", "Pakistani"),
    ("bd", "Bangladeshi"),
    ("np", "Nepali"),
    ("lk", "Sri Lankan"),
    ("se", "Swedish"),
    ("no", "Norwegian"),
    ("dk", "Danish"),
    ("fi", "Finnish"),
    ("is", "Icelandic"),
    ("nl", "Dutch"),
    ("be", "Belgian"),
    ("ch", "Swiss"),
    ("at", "Austrian"),
    ("ca", "Canadian"),
    ("latam", "Latin American"),
    ("ie", "Irish"),
    ("al", "Albanian"),
    ("am", "Armenian"),
    ("az", "Azerbaijani"),
    ("ge", "Georgian"),
    ("by", "Belarusian"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("ee", "Estonian"),
    ("mt", "Maltese"),
    ("me", "Montenegrin"),
    ("af", "Afghan"),
    ("kz", "Kazakh"),
    ("uz", "Uzbek"),
    ("kg", "Kyrgyz"),
    ("tj", "Tajik"),
    ("tm", "Turkmen"),
    ("mn", "Mongolian"),
    ("mm", "Myanmar"),
    ("kh", "Khmer"),
    ("la", "Lao"),
    ("ke", "Kenyan"),
    ("tz", "Tanzanian"),
    ("za", "South African"),
    ("gh", "Ghanaian"),
    ("ng", "Nigerian"),
    ("epo", "Esperanto"),
];

/// Display name of a layout code. Codes not in [`LAYOUTS`] are shown as they are.
pub fn display_name(code: &str) -> &str {
    LAYOUTS
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(code, |(_, name)| name)
}

/// Title of a selected-layout row, such as `German (de)`.
pub fn row_title(code: &str) -> String {
    format!("{} ({code})", display_name(code))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn table() {
        assert_eq!(LAYOUTS.len(), 82);
        assert_eq!(LAYOUTS.first(), Some(&("us", "United States")));
        assert_eq!(LAYOUTS.last(), Some(&("epo", "Esperanto")));

        let codes: HashSet<_> = LAYOUTS.iter().map(|(code, _)| code).collect();
        assert_eq!(codes.len(), LAYOUTS.len());
    }

    #[test]
    fn names() {
        assert_eq!(display_name("de"), "German");
        assert_eq!(display_name("latam"), "Latin American");
        assert_eq!(display_name("xx"), "xx");
        assert_eq!(row_title("fr"), "French (fr)");
        assert_eq!(row_title("us(intl)"), "us(intl) (us(intl))");
    }
}
