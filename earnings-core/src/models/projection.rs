use serde::{Deserialize, Serialize};

/// Figures derived from the current [`Inputs`](super::Inputs).
///
/// Never stored; rebuilt from the inputs on every read.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DerivedProjection {
    /// Earnings if every pending user converts at the current rate.
    pub future_earnings: f64,
    /// Earnings at the floor commission rate.
    pub min_projection: f64,
    /// Earnings if the pipeline grows by half at the current rate.
    pub max_projection: f64,
}
