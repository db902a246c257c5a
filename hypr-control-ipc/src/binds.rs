//! Parsing of `hyprctl binds` listings.
//!
//! The JSON listing (`hyprctl -j binds`) is an array of objects. The text listing prints one block
//! per binding, a header line followed by indented `field: value` lines:
//!
//! ```text
//! bind
//! 	modmask: 64
//! 	submap:
//! 	key: Space
//! 	keycode: 0
//! 	catchall: false
//! 	description:
//! 	dispatcher: exec
//! 	arg: hyprctl switchxkblayout all next
//! ```

use serde::Deserialize;

use crate::modifiers::ModifierCombo;
use crate::utils::parse_leading_int;

/// One registered key binding.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct BindInfo {
    /// Modifier bitmask, see [`ModMask`](crate::modifiers::ModMask).
    #[serde(default)]
    pub modmask: u32,
    /// Key name.
    #[serde(default)]
    pub key: String,
    /// Dispatcher, such as `exec`.
    #[serde(default)]
    pub dispatcher: String,
    /// Dispatcher argument.
    #[serde(default)]
    pub arg: String,
}

impl BindInfo {
    /// The modifier combination of this binding, if it is one of the known ones.
    pub fn modifier_combo(&self) -> Option<ModifierCombo> {
        ModifierCombo::from_modmask(self.modmask)
    }
}

/// Parses the JSON listing.
pub fn parse_json(reply: &str) -> serde_json::Result<Vec<BindInfo>> {
    serde_json::from_str(reply)
}

/// Parses the text listing.
///
/// Unknown fields are ignored. Field lines appearing before any header line start a binding of
/// their own, so truncated listings still yield what they contain. A `modmask` that is not a
/// number reads as `0`.
pub fn parse_text(reply: &str) -> Vec<BindInfo> {
    let mut binds = Vec::new();
    let mut current: Option<BindInfo> = None;

    for line in reply.lines() {
        let line = line.trim_end_matches('\r');

        if line.trim().is_empty() {
            binds.extend(current.take());
            continue;
        }

        let is_field = line.starts_with(char::is_whitespace);
        if !is_field {
            binds.extend(current.take());
            current = Some(BindInfo::default());
            continue;
        }

        let Some((name, value)) = line.trim_start().split_once(':') else {
            continue;
        };
        let value = value.trim_start();
        let bind = current.get_or_insert_with(BindInfo::default);

        match name {
            "modmask" => {
                let modmask = parse_leading_int(value).and_then(|m| u32::try_from(m).ok());
                bind.modmask = modmask.unwrap_or(0);
            }
            "key" => bind.key = value.to_owned(),
            "dispatcher" => bind.dispatcher = value.to_owned(),
            "arg" => bind.arg = value.to_owned(),
            _ => (),
        }
    }

    binds.extend(current);
    binds
}

/// Finds the binding whose argument contains `marker`.
///
/// If several match, the last one listed wins.
pub fn find_by_arg<'a>(binds: &'a [BindInfo], marker: &str) -> Option<&'a BindInfo> {
    binds.iter().rev().find(|bind| bind.arg.contains(marker))
}
