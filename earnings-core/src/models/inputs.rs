use serde::{Deserialize, Serialize};

/// Smallest accepted number of pending conversions.
pub const PENDING_USERS_MIN: u32 = 1;
/// Upper bound of the pending conversions slider. Direct entry is not capped.
pub const PENDING_USERS_SLIDER_MAX: u32 = 500;
/// Commission rate bounds, in whole percent.
pub const COMMISSION_RATE_MIN: u8 = 20;
pub const COMMISSION_RATE_MAX: u8 = 50;

/// The three user-editable figures that drive every projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    /// Prospective customers not yet onboarded.
    pub pending_users: u32,
    /// Average investment per person, in the display currency.
    pub avg_investment: f64,
    /// Partner commission, in whole percent.
    pub commission_rate: u8,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            pending_users: 10,
            avg_investment: 400.0,
            commission_rate: COMMISSION_RATE_MIN,
        }
    }
}

impl Inputs {
    /// Commission rate as a fraction (`20` -> `0.2`).
    pub fn commission_fraction(&self) -> f64 {
        f64::from(self.commission_rate) / 100.0
    }
}
