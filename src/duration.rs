//! Textual duration parsing
//!
//! Policy stores hold durations as strings like `"30s"`, `"1h30m"` or
//! `"150ms"`: an optional sign followed by one or more decimal numbers, each
//! with an optional fraction and a mandatory unit suffix. Supported units are
//! `ns`, `us` (or `µs`), `ms`, `s`, `m`, and `h`.

use time::Duration;

use crate::error::{Error, Result};

const NANOS_PER_SEC: i128 = 1_000_000_000;

fn invalid(input: &str, reason: &str) -> Error {
    Error::InvalidDuration(input.to_string(), reason.to_string())
}

fn unit_nanos(unit: &str) -> Option<i128> {
    match unit {
        "ns" => Some(1),
        // Both the micro sign (U+00B5) and Greek mu (U+03BC) spellings occur
        // in values written by Go-side tooling.
        "us" | "\u{00b5}s" | "\u{03bc}s" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(60 * NANOS_PER_SEC),
        "h" => Some(3_600 * NANOS_PER_SEC),
        _ => None,
    }
}

/// Parse a duration from its textual policy representation
///
/// The result may be negative (e.g., `"-5s"`); callers that require a
/// non-negative span must check [`Duration::is_negative`] themselves.
/// Fractional segments accumulate through `f64`, so sub-nanosecond
/// remainders (e.g., the tail of `"1.0000000009s"`) are not preserved
/// exactly; whole-unit values are.
///
/// # Errors
///
/// Returns [`Error::InvalidDuration`] for empty input, a missing or unknown
/// unit suffix, a malformed number, or a value too large to represent.
///
/// # Example
/// ```rust
/// use polman::parse_duration;
/// use time::Duration;
///
/// assert_eq!(parse_duration("1h30m").unwrap(), Duration::minutes(90));
/// assert_eq!(parse_duration("1.5s").unwrap(), Duration::milliseconds(1500));
/// assert!(parse_duration("90").is_err()); // unit is mandatory
/// ```
pub fn parse_duration(s: &str) -> Result<Duration> {
    let mut rest = s;
    let mut negative = false;
    if let Some(r) = rest.strip_prefix('-') {
        negative = true;
        rest = r;
    } else if let Some(r) = rest.strip_prefix('+') {
        rest = r;
    }

    // Bare zero needs no unit
    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid(s, "empty duration"));
    }

    let mut total: i128 = 0;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_len);
        if number.is_empty() {
            return Err(invalid(s, "expected a number"));
        }
        let value: f64 = number.parse().map_err(|_| invalid(s, "malformed number"))?;

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_len);
        if unit.is_empty() {
            return Err(invalid(s, "missing unit suffix"));
        }
        let scale = unit_nanos(unit).ok_or_else(|| invalid(s, "unknown unit suffix"))?;

        // Segment magnitudes are non-negative (the sign was stripped above),
        // so overflow can only push the total upward.
        let nanos = value * scale as f64;
        if !nanos.is_finite() || nanos >= i128::MAX as f64 {
            return Err(invalid(s, "duration out of range"));
        }
        total = total
            .checked_add(nanos as i128)
            .ok_or_else(|| invalid(s, "duration out of range"))?;
        rest = next;
    }

    if negative {
        total = -total;
    }
    let nanos = i64::try_from(total).map_err(|_| invalid(s, "duration out of range"))?;
    Ok(Duration::nanoseconds(nanos))
}
