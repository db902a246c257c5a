use std::fmt;

use hypr_control_ipc::reply;
use hypr_control_ipc::utils::{parse_leading_float, parse_leading_int};
use hypr_control_ipc::{Request, Transport};

/// Live view of Hyprland's configuration options.
///
/// Nothing is cached: every read runs `hyprctl getoption`, every write runs `hyprctl keyword`.
/// Reads never fail. Whether the option does not exist, Hyprland is unreachable or the reply
/// makes no sense, the caller gets its default back. Writes are fire-and-forget, their outcome
/// is only logged.
#[derive(Debug)]
pub struct OptionStore<T> {
    transport: T,
}

/// Value written to an option.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// Floating-point value printed with a fixed number of decimals.
    Float { value: f64, precision: usize },
    Int(i64),
    Bool(bool),
    Str(String),
}

impl<T: Transport> OptionStore<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Reads the raw value of an option.
    pub fn read(&self, path: &str) -> Option<String> {
        let reply = match self.transport.send(&Request::GetOption(path.to_owned())) {
            Ok(reply) => reply,
            Err(err) => {
                debug!("error reading {path}: {err:?}");
                return None;
            }
        };

        let value = reply::option_value(&reply);
        if value.is_none() {
            trace!("no value for {path} in {reply:?}");
        }
        value.map(str::to_owned)
    }

    pub fn read_float(&self, path: &str, default: f64) -> f64 {
        self.read(path)
            .as_deref()
            .and_then(parse_leading_float)
            .unwrap_or(default)
    }

    pub fn read_int(&self, path: &str, default: i32) -> i32 {
        self.read(path)
            .as_deref()
            .and_then(parse_leading_int)
            .unwrap_or(default)
    }

    /// Reads an integer option as a boolean: zero is false, anything else is true.
    pub fn read_bool(&self, path: &str, default: bool) -> bool {
        self.read_int(path, i32::from(default)) != 0
    }

    /// Reads the raw value of an option, or an empty string.
    pub fn read_string(&self, path: &str) -> String {
        self.read(path).unwrap_or_default()
    }

    /// Sets an option.
    pub fn write(&self, path: &str, value: impl Into<OptionValue>) {
        self.keyword(path, &value.into().to_string());
    }

    /// Runs `hyprctl keyword <key> <value>`.
    pub fn keyword(&self, key: &str, value: &str) {
        match self.transport.send(&Request::keyword(key, value)) {
            Ok(reply) if reply::is_ok(&reply) => (),
            Ok(reply) => debug!("keyword {key} {value}: {}", reply.trim()),
            Err(err) => warn!("error setting {key}: {err:?}"),
        }
    }
}

impl OptionValue {
    pub fn float(value: f64, precision: usize) -> Self {
        Self::Float { value, precision }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Float { value, precision } => write!(f, "{value:.precision$}"),
            OptionValue::Int(value) => write!(f, "{value}"),
            OptionValue::Bool(value) => f.write_str(if *value { "true" } else { "false" }),
            OptionValue::Str(value) => f.write_str(value),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::testing::ScriptedTransport;

    fn store(transport: ScriptedTransport) -> OptionStore<ScriptedTransport> {
        OptionStore::new(transport)
    }

    #[test]
    fn read_typed_values() {
        let store = store(
            ScriptedTransport::new()
                .reply("getoption input:sensitivity", "float: -0.350000\nset: true\n")
                .reply("getoption input:repeat_rate", "int: 40\nset: true\n")
                .reply("getoption input:left_handed", "int: 1\nset: true\n")
                .reply("getoption input:kb_layout", "str: us,de\nset: true\n"),
        );

        assert_eq!(store.read_float("input:sensitivity", 0.), -0.35);
        assert_eq!(store.read_int("input:repeat_rate", 25), 40);
        assert!(store.read_bool("input:left_handed", false));
        assert_eq!(store.read_string("input:kb_layout"), "us,de");
    }

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let store = store(ScriptedTransport::new());

        assert_eq!(store.read_float("missing:key", 2.5), 2.5);
        assert_eq!(store.read_int("missing:key", 7), 7);
        assert!(store.read_bool("missing:key", true));
        assert!(!store.read_bool("missing:key", false));
        assert_eq!(store.read_string("missing:key"), "");
        assert_eq!(store.read("missing:key"), None);
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        let store = store(
            ScriptedTransport::new()
                .reply("getoption a:empty", "")
                .reply("getoption a:error", "no such option\n")
                .reply("getoption a:text", "str: flat\nset: true\n")
                .reply("getoption a:blank", "str: \nset: false\n"),
        );

        for path in ["a:empty", "a:error", "a:text", "a:blank"] {
            assert_eq!(store.read_float(path, 2.5), 2.5, "{path}");
            assert_eq!(store.read_int(path, -4), -4, "{path}");
        }
        assert_eq!(store.read_string("a:blank"), "");
    }

    #[test]
    fn bool_is_nonzero_int() {
        let store = store(
            ScriptedTransport::new()
                .reply("getoption a:zero", "int: 0\nset: true\n")
                .reply("getoption a:two", "int: 2\nset: true\n")
                .reply("getoption a:word", "str: true\nset: true\n"),
        );

        assert!(!store.read_bool("a:zero", true));
        assert!(store.read_bool("a:two", false));
        // Not an integer, so the default wins.
        assert!(!store.read_bool("a:word", false));
    }

    #[test]
    fn float_reads_as_truncated_int() {
        let store = store(
            ScriptedTransport::new().reply("getoption cursor:inactive_timeout", "float: 5.000000"),
        );
        assert_eq!(store.read_int("cursor:inactive_timeout", 0), 5);
    }

    #[test]
    fn every_read_queries_again() {
        let store = store(ScriptedTransport::new().reply("getoption a:b", "int: 1"));
        store.read_int("a:b", 0);
        store.read_int("a:b", 0);
        assert_eq!(store.transport().calls(), ["getoption a:b", "getoption a:b"]);
    }

    #[test]
    fn write_formats_values() {
        let store = store(ScriptedTransport::new());

        store.write("input:sensitivity", OptionValue::float(0.25, 2));
        store.write("cursor:zoom_factor", OptionValue::float(1.34, 1));
        store.write("input:repeat_rate", 30_i32);
        store.write("input:left_handed", true);
        store.write("input:accel_profile", "flat");

        assert_eq!(
            store.transport().calls(),
            [
                "keyword input:sensitivity 0.25",
                "keyword cursor:zoom_factor 1.3",
                "keyword input:repeat_rate 30",
                "keyword input:left_handed true",
                "keyword input:accel_profile flat",
            ]
        );
    }

    #[test]
    fn write_failure_is_swallowed() {
        let store = store(ScriptedTransport::new().failing());
        store.write("input:left_handed", false);
        assert_eq!(store.transport().calls(), ["keyword input:left_handed false"]);
    }

    #[test]
    fn option_value_display() {
        assert_eq!(OptionValue::float(-1., 2).to_string(), "-1.00");
        assert_eq!(OptionValue::float(3., 1).to_string(), "3.0");
        assert_eq!(OptionValue::from(false).to_string(), "false");
        assert_eq!(OptionValue::from(300_i32).to_string(), "300");
    }
}
