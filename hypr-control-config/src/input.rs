use std::str::FromStr;

use hypr_control_ipc::Transport;
use miette::miette;

use crate::options::{BoolOption, Choice, FloatOption, IntSwitchOption};
use crate::store::OptionStore;

pub const SENSITIVITY: FloatOption = FloatOption::new("input:sensitivity", 0., 2);
pub const FORCE_NO_ACCEL: BoolOption = BoolOption::new("input:force_no_accel", false);
pub const LEFT_HANDED: BoolOption = BoolOption::new("input:left_handed", false);
pub const NATURAL_SCROLL: BoolOption = BoolOption::new("input:natural_scroll", false);
pub const SPECIAL_FALLTHROUGH: BoolOption = BoolOption::new("input:special_fallthrough", false);

/// Whether focus moves to floating windows on hover; Hyprland's `2` means yes.
pub const FLOAT_SWITCH_OVERRIDE_FOCUS: IntSwitchOption = IntSwitchOption {
    path: "input:float_switch_override_focus",
    default: 1,
    on: 2,
    off: 0,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AccelProfile {
    /// Leave the libinput default.
    #[default]
    Default,
    Flat,
    Adaptive,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMethod {
    /// Leave the libinput default.
    #[default]
    Default,
    TwoFinger,
    Edge,
    OnButtonDown,
    NoScroll,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FollowMouse {
    Disabled,
    #[default]
    Always,
    Loose,
    Strict,
}

impl AccelProfile {
    const ALL: [Self; 3] = [Self::Default, Self::Flat, Self::Adaptive];

    /// Value of `input:accel_profile`, if this profile sets one.
    pub fn value(self) -> Option<&'static str> {
        match self {
            AccelProfile::Default => None,
            AccelProfile::Flat => Some("flat"),
            AccelProfile::Adaptive => Some("adaptive"),
        }
    }
}

impl Choice for AccelProfile {
    const LABELS: &'static [&'static str] = &["Default", "Flat", "Adaptive"];

    fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    fn index(self) -> u32 {
        self as u32
    }

    fn read<T: Transport>(store: &OptionStore<T>) -> Option<Self> {
        store.read("input:accel_profile")?.parse().ok()
    }

    fn write<T: Transport>(self, store: &OptionStore<T>) {
        if let Some(value) = self.value() {
            store.write("input:accel_profile", value);
        }
    }
}

impl FromStr for AccelProfile {
    type Err = miette::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => Ok(Self::Flat),
            "adaptive" => Ok(Self::Adaptive),
            _ => Err(miette!(
                r#"invalid accel profile, can be "flat" or "adaptive""#
            )),
        }
    }
}

impl ScrollMethod {
    const ALL: [Self; 5] = [
        Self::Default,
        Self::TwoFinger,
        Self::Edge,
        Self::OnButtonDown,
        Self::NoScroll,
    ];

    /// Value of `input:scroll_method`, if this method sets one.
    pub fn value(self) -> Option<&'static str> {
        match self {
            ScrollMethod::Default => None,
            ScrollMethod::TwoFinger => Some("2fg"),
            ScrollMethod::Edge => Some("edge"),
            ScrollMethod::OnButtonDown => Some("on_button_down"),
            ScrollMethod::NoScroll => Some("no_scroll"),
        }
    }
}

impl Choice for ScrollMethod {
    const LABELS: &'static [&'static str] =
        &["Default", "Two Finger", "Edge", "On Button Down", "No Scroll"];

    fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    fn index(self) -> u32 {
        self as u32
    }

    fn read<T: Transport>(store: &OptionStore<T>) -> Option<Self> {
        store.read("input:scroll_method")?.parse().ok()
    }

    fn write<T: Transport>(self, store: &OptionStore<T>) {
        if let Some(value) = self.value() {
            store.write("input:scroll_method", value);
        }
    }
}

impl FromStr for ScrollMethod {
    type Err = miette::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2fg" => Ok(Self::TwoFinger),
            "edge" => Ok(Self::Edge),
            "on_button_down" => Ok(Self::OnButtonDown),
            "no_scroll" => Ok(Self::NoScroll),
            _ => Err(miette!(
                r#"invalid scroll method, can be "2fg", "edge", "on_button_down" or "no_scroll""#
            )),
        }
    }
}

impl FollowMouse {
    const ALL: [Self; 4] = [Self::Disabled, Self::Always, Self::Loose, Self::Strict];
}

impl Choice for FollowMouse {
    const LABELS: &'static [&'static str] = &["Disabled", "Always", "Loose", "Strict"];

    fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    fn index(self) -> u32 {
        self as u32
    }

    /// `input:follow_mouse` holds the choice index directly.
    fn read<T: Transport>(store: &OptionStore<T>) -> Option<Self> {
        let value = store.read_int("input:follow_mouse", Self::default().index() as i32);
        u32::try_from(value).ok().and_then(Self::from_index)
    }

    fn write<T: Transport>(self, store: &OptionStore<T>) {
        store.write("input:follow_mouse", self.index() as i32);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::testing::ScriptedTransport;

    fn store_with(path: &str, reply: &str) -> OptionStore<ScriptedTransport> {
        OptionStore::new(ScriptedTransport::new().reply(&format!("getoption {path}"), reply))
    }

    #[test]
    fn accel_profile_read() {
        let read = |reply| AccelProfile::read(&store_with("input:accel_profile", reply));
        assert_eq!(read("str: flat"), Some(AccelProfile::Flat));
        assert_eq!(read("str: adaptive"), Some(AccelProfile::Adaptive));
        assert_eq!(read("str: custom 0.2 0.0 0.5"), None);
        assert_eq!(read("str: [[EMPTY]]"), None);
        assert_eq!(read(""), None);
    }

    #[test]
    fn default_choices_write_nothing() {
        let store = OptionStore::new(ScriptedTransport::new());
        AccelProfile::Default.write(&store);
        ScrollMethod::Default.write(&store);
        assert_eq!(store.transport().calls(), Vec::<String>::new());
    }

    #[test]
    fn scroll_method_roundtrip() {
        let store = OptionStore::new(ScriptedTransport::new());
        for index in 1..ScrollMethod::LABELS.len() as u32 {
            ScrollMethod::from_index(index).unwrap().write(&store);
        }
        assert_eq!(
            store.transport().calls(),
            [
                "keyword input:scroll_method 2fg",
                "keyword input:scroll_method edge",
                "keyword input:scroll_method on_button_down",
                "keyword input:scroll_method no_scroll",
            ]
        );

        for (method, value) in [
            (ScrollMethod::TwoFinger, "str: 2fg"),
            (ScrollMethod::OnButtonDown, "str: on_button_down"),
        ] {
            let store = store_with("input:scroll_method", value);
            assert_eq!(ScrollMethod::read(&store), Some(method));
        }
    }

    #[test]
    fn follow_mouse() {
        let read = |reply| FollowMouse::read(&store_with("input:follow_mouse", reply));
        assert_eq!(read("int: 3"), Some(FollowMouse::Strict));
        assert_eq!(read("int: 0"), Some(FollowMouse::Disabled));
        assert_eq!(read("int: 4"), None);
        assert_eq!(read("int: -1"), None);
        // Unreadable means the default of 1.
        assert_eq!(read(""), Some(FollowMouse::Always));

        let store = OptionStore::new(ScriptedTransport::new());
        FollowMouse::Loose.write(&store);
        assert_eq!(store.transport().calls(), ["keyword input:follow_mouse 2"]);
    }

    #[test]
    fn labels_match_choices() {
        assert_eq!(AccelProfile::LABELS.len(), AccelProfile::ALL.len());
        assert_eq!(ScrollMethod::LABELS.len(), ScrollMethod::ALL.len());
        assert_eq!(FollowMouse::LABELS.len(), FollowMouse::ALL.len());
        assert_eq!(AccelProfile::from_index(3), None);
    }
}
