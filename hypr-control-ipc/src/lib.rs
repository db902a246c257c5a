//! Types for talking to Hyprland through its `hyprctl` control executable.
//!
//! Every interaction is a single blocking `hyprctl` invocation. Requests are described by
//! [`Request`], executed by a [`Transport`] (normally [`Hyprctl`]), and the textual replies are
//! picked apart by the functions in [`reply`] and [`binds`].
#![warn(missing_docs)]

#[macro_use]
extern crate tracing;

pub mod binds;
pub mod modifiers;
pub mod reply;
pub mod utils;

mod hyprctl;
pub use hyprctl::{Hyprctl, Transport, DEFAULT_PROGRAM, INSTANCE_SIGNATURE_ENV, PROGRAM_ENV};

/// `hyprctl` command switching keyboard layouts.
pub const SWITCH_LAYOUT_COMMAND: &str = "switchxkblayout";

/// Argument of the binding action that cycles keyboard layouts, following the program name.
pub const SWITCH_LAYOUT_ARGS: &str = "switchxkblayout all next";

/// Request from the settings panel to Hyprland.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Read the current value of one configuration option.
    GetOption(String),
    /// List all registered key bindings.
    Binds {
        /// Ask for the machine-readable JSON listing instead of the text one.
        json: bool,
    },
    /// Set a configuration keyword at runtime.
    ///
    /// This also covers `bind` and `unbind`, which Hyprland treats as keywords.
    Keyword {
        /// Keyword name, such as `input:sensitivity` or `bind`.
        key: String,
        /// Keyword value, passed through verbatim.
        value: String,
    },
}

impl Request {
    /// Creates a [`Request::Keyword`].
    pub fn keyword(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Keyword {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Command-line arguments that carry this request to `hyprctl`.
    pub fn to_args(&self) -> Vec<String> {
        match self {
            Request::GetOption(option) => vec![String::from("getoption"), option.clone()],
            Request::Binds { json: false } => vec![String::from("binds")],
            Request::Binds { json: true } => vec![String::from("-j"), String::from("binds")],
            Request::Keyword { key, value } => {
                vec![String::from("keyword"), key.clone(), value.clone()]
            }
        }
    }
}

/// Value of a `bind` keyword mapping `descriptor` to cycling through all keyboard layouts.
///
/// `program` is the control executable the binding should spawn.
pub fn switch_layout_bind(descriptor: &str, program: &str) -> String {
    format!("{descriptor}, exec, {program} {SWITCH_LAYOUT_ARGS}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn request_args() {
        assert_eq!(
            Request::GetOption(String::from("input:sensitivity")).to_args(),
            ["getoption", "input:sensitivity"]
        );
        assert_eq!(Request::Binds { json: false }.to_args(), ["binds"]);
        assert_eq!(Request::Binds { json: true }.to_args(), ["-j", "binds"]);
        assert_eq!(
            Request::keyword("input:kb_layout", "de,fr").to_args(),
            ["keyword", "input:kb_layout", "de,fr"]
        );
    }

    #[test]
    fn switch_layout_bind_value() {
        assert_eq!(
            switch_layout_bind("SUPER, Space", "hyprctl"),
            "SUPER, Space, exec, hyprctl switchxkblayout all next"
        );
    }
}
