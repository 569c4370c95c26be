//! Currency and number display.
//!
//! All values are shown as whole numbers, rounded half away from zero.
//! Non-finite input always renders as zero, so a display never shows `NaN`.
//!
//! | Grouping  | `1234567`    |
//! |-----------|--------------|
//! | `Indian`  | `12,34,567`  |
//! | `Western` | `1,234,567`  |

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::to_whole_decimal;

/// Digit grouping convention for the integer part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// Last three digits, then groups of two (`en-IN`).
    #[default]
    Indian,
    /// Groups of three.
    Western,
}

/// Locale settings used for every value the calculator displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    pub currency_symbol: String,
    pub grouping: Grouping,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            grouping: Grouping::Indian,
        }
    }
}

impl NumberFormat {
    /// Formats `value` as a whole currency amount, e.g. `₹1,23,457`.
    pub fn currency(
        &self,
        value: f64,
    ) -> String {
        let whole = to_whole_decimal(value);
        let sign = if whole < Decimal::ZERO { "-" } else { "" };
        format!(
            "{sign}{}{}",
            self.currency_symbol,
            self.group(&whole)
        )
    }

    /// Formats `value` as a whole number without a currency symbol.
    pub fn number(
        &self,
        value: f64,
    ) -> String {
        let whole = to_whole_decimal(value);
        let sign = if whole < Decimal::ZERO { "-" } else { "" };
        format!("{sign}{}", self.group(&whole))
    }

    fn group(
        &self,
        whole: &Decimal,
    ) -> String {
        let abs = whole.abs().to_string();
        let digits = abs.split('.').next().unwrap_or("0");
        match self.grouping {
            Grouping::Indian => group_indian(digits),
            Grouping::Western => group_by(digits, 3),
        }
    }
}

/// Formats with the default (`en-IN`) locale.
pub fn format_currency(value: f64) -> String {
    NumberFormat::default().currency(value)
}

/// Formats with the default (`en-IN`) locale, without the currency symbol.
pub fn format_number(value: f64) -> String {
    NumberFormat::default().number(value)
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    format!("{},{tail}", group_by(head, 2))
}

fn group_by(
    digits: &str,
    size: usize,
) -> String {
    let first = match digits.len() % size {
        0 => size.min(digits.len()),
        n => n,
    };
    let mut out = String::with_capacity(digits.len() + digits.len() / size);
    out.push_str(&digits[..first]);
    let mut rest = &digits[first..];
    while !rest.is_empty() {
        let (chunk, remainder) = rest.split_at(size);
        out.push(',');
        out.push_str(chunk);
        rest = remainder;
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn western() -> NumberFormat {
        NumberFormat {
            currency_symbol: "$".to_string(),
            grouping: Grouping::Western,
        }
    }

    // =========================================================================
    // format_currency tests
    // =========================================================================

    #[test]
    fn currency_small_values_have_no_separator() {
        assert_eq!(format_currency(0.0), "₹0");
        assert_eq!(format_currency(800.0), "₹800");
    }

    #[test]
    fn currency_uses_indian_grouping() {
        assert_eq!(format_currency(1000.0), "₹1,000");
        assert_eq!(format_currency(123456.0), "₹1,23,456");
        assert_eq!(format_currency(1234567.0), "₹12,34,567");
        assert_eq!(format_currency(123456789.0), "₹12,34,56,789");
    }

    #[test]
    fn currency_rounds_to_whole_units() {
        assert_eq!(format_currency(1999.49), "₹1,999");
        assert_eq!(format_currency(1999.5), "₹2,000");
    }

    #[test]
    fn currency_non_finite_formats_as_zero() {
        assert_eq!(format_currency(f64::NAN), "₹0");
        assert_eq!(format_currency(f64::INFINITY), "₹0");
        assert_eq!(format_currency(f64::NEG_INFINITY), "₹0");
    }

    #[test]
    fn currency_negative_sign_precedes_symbol() {
        assert_eq!(format_currency(-1500.0), "-₹1,500");
    }

    #[test]
    fn currency_negative_rounding_to_zero_has_no_sign() {
        assert_eq!(format_currency(-0.2), "₹0");
    }

    // =========================================================================
    // format_number tests
    // =========================================================================

    #[test]
    fn number_has_no_symbol() {
        assert_eq!(format_number(1200.0), "1,200");
        assert_eq!(format_number(f64::NAN), "0");
    }

    // =========================================================================
    // NumberFormat tests
    // =========================================================================

    #[test]
    fn western_grouping_uses_thousands() {
        let format = western();

        assert_eq!(format.currency(1234567.0), "$1,234,567");
        assert_eq!(format.currency(123456.0), "$123,456");
        assert_eq!(format.number(999.0), "999");
    }
}
