use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::parse_leading_float;

/// Validation failures for a historical override.
///
/// Earnings are checked first, so when both fields are bad the earnings
/// error is the one reported.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum HistoricalOverrideError {
    #[error("Enter a valid positive amount for earnings.")]
    InvalidEarnings,

    #[error("Total onboarded must be greater than zero.")]
    InvalidOnboarded,
}

/// Past performance entered through the historical override dialog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    /// Total earnings to date. Always finite and positive.
    pub total_earnings: f64,
    /// Customers successfully onboarded to date. Always finite and positive.
    pub total_onboarded: f64,
}

impl HistoricalRecord {
    /// Parses the two raw dialog fields.
    ///
    /// Each field is read as a leading number, so `"5000 INR"` is 5000.
    ///
    /// # Errors
    ///
    /// Returns [`HistoricalOverrideError::InvalidEarnings`] if the earnings
    /// text is not a finite positive number, otherwise
    /// [`HistoricalOverrideError::InvalidOnboarded`] if the onboarded text is not.
    pub fn parse(
        earnings: &str,
        onboarded: &str,
    ) -> Result<Self, HistoricalOverrideError> {
        let total_earnings = positive_finite(earnings).ok_or(HistoricalOverrideError::InvalidEarnings)?;
        let total_onboarded =
            positive_finite(onboarded).ok_or(HistoricalOverrideError::InvalidOnboarded)?;

        Ok(Self {
            total_earnings,
            total_onboarded,
        })
    }

    /// Average investment per onboarded customer, never negative.
    ///
    /// Falls back to 0 if the quotient is not finite (for example when a
    /// tiny onboarded count overflows the division).
    pub fn average_investment(&self) -> f64 {
        let avg = self.total_earnings / self.total_onboarded;
        if avg.is_finite() { avg.max(0.0) } else { 0.0 }
    }
}

fn positive_finite(text: &str) -> Option<f64> {
    parse_leading_float(text).filter(|v| v.is_finite() && *v > 0.0)
}
