//! Lenient number parsing for values scraped from `hyprctl` output.
//!
//! These accept the longest numeric prefix after optional leading whitespace and ignore whatever
//! follows, so `"5.000000"` reads as the integer `5` and `"12px"` as `12`.

/// Parses the leading integer of `s`.
///
/// Returns `None` when `s` does not start with a number or when it does not fit into an `i32`.
pub fn parse_leading_int(s: &str) -> Option<i32> {
    let s = s.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    s[..end].parse().ok()
}

/// Parses the leading decimal floating-point number of `s`.
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let is_digit = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let mut mantissa_digits = 0;
    while is_digit(end) {
        end += 1;
        mantissa_digits += 1;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while is_digit(end) {
            end += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    // The exponent only counts if at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        if is_digit(exp_end) {
            while is_digit(exp_end) {
                exp_end += 1;
            }
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}
