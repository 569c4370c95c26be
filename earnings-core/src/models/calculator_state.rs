use serde::{Deserialize, Serialize};

use super::{AvgInvestmentSource, Inputs, ViewMode};

/// Session state owned by the calculator controller.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculatorState {
    pub inputs: Inputs,
    /// Earnings from the last applied historical record.
    /// Kept after a manual edit leaves historical mode.
    pub all_time_earnings: f64,
    pub avg_source: AvgInvestmentSource,
}

impl CalculatorState {
    pub fn has_historical_data(&self) -> bool {
        self.avg_source.has_historical_data()
    }

    pub fn view_mode(&self) -> ViewMode {
        ViewMode::from(self.avg_source)
    }
}
