//! Lenient numeric parsing for raw text fields.
//!
//! Nothing here fails loudly. Each parser returns `None` when the text holds
//! no usable number and leaves the fallback to the caller, which is how the
//! calculator degrades malformed entry to a sane value instead of erroring.
//!
//! Commas are treated as thousands separators and removed before parsing
//! (`"1,234.5"` is `1234.5`).

use std::sync::LazyLock;

use regex::Regex;

// ASCII digits only; `\d` would also match other Unicode digit classes.
const DECIMAL_PATTERN: &str = r"[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?";

static LEADING_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{DECIMAL_PATTERN}")).expect("valid decimal pattern"));
static WHOLE_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{DECIMAL_PATTERN}$")).expect("valid decimal pattern"));
static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+").expect("valid integer pattern"));

/// Trims whitespace and removes commas (thousands separator).
fn normalize(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses the whole field as a number.
///
/// Empty or whitespace-only input is 0. Any trailing garbage makes the
/// whole field invalid (`"12abc"` is `None`).
pub fn parse_number(s: &str) -> Option<f64> {
    let normalized = normalize(s);
    if normalized.is_empty() {
        return Some(0.0);
    }
    if !WHOLE_DECIMAL.is_match(&normalized) {
        tracing::debug!(input = %s, "not a number");
        return None;
    }
    normalized.parse().ok()
}

/// Parses the longest numeric prefix of the field.
///
/// `"5000 rupees"` is `5000.0`; `"rupees"` and `""` are `None`.
/// The result may be infinite for out-of-range exponents (`"1e999"`).
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let normalized = normalize(s);
    LEADING_DECIMAL
        .find(&normalized)
        .and_then(|m| m.as_str().parse().ok())
}

/// Parses the leading integer of the field, ignoring any fraction.
///
/// `"25.7"` is `25`. Values beyond `i64` saturate.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let normalized = normalize(s);
    let digits = LEADING_INTEGER.find(&normalized)?.as_str();
    match digits.parse::<i64>() {
        Ok(value) => Some(value),
        // Every match is a valid float, so this only saturates.
        Err(_) => digits.parse::<f64>().ok().map(|v| v as i64),
    }
}

/// Replaces `NaN` and infinities with 0.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
