//! Shared numeric helpers for the projection and formatting code.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to a whole number, half away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use earnings_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(dec!(1234.4)), dec!(1234));
/// assert_eq!(round_whole(dec!(1234.5)), dec!(1235));
/// assert_eq!(round_whole(dec!(-1234.5)), dec!(-1235)); // Away from zero
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a float to a whole-currency [`Decimal`].
///
/// Non-finite values and values outside the `Decimal` range become zero.
pub fn to_whole_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value)
        .map(round_whole)
        .unwrap_or(Decimal::ZERO)
}

/// Clamps to zero or above, mapping non-finite values to zero.
pub fn non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
