//! Parsing of `hyprctl getoption` and `hyprctl keyword` replies.
//!
//! `getoption` prints the value on its first line, prefixed by the value type:
//!
//! ```text
//! float: 0.500000
//! set: true
//! ```
//!
//! Only that first line is looked at.

/// Extracts the option value from a `getoption` reply.
///
/// The value is whatever follows the first colon and the single character after it. Returns
/// `None` for an empty reply, a first line without a colon, or nothing after the colon.
pub fn option_value(reply: &str) -> Option<&str> {
    let line = reply.lines().next()?;
    let line = line.trim_end_matches('\r');

    let colon = line.find(':')?;
    let value = line.get(colon + 2..)?;
    (!value.is_empty()).then_some(value)
}

/// Whether a `keyword` reply reports success.
pub fn is_ok(reply: &str) -> bool {
    reply.trim() == "ok"
}
