use serde::{Deserialize, Serialize};

/// Where the current average investment figure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AvgInvestmentSource {
    /// Typed in by the user (or a configured default).
    #[default]
    Manual,
    /// Back-derived from a historical record.
    HistoricalDerived,
}

/// Events that move the average investment between sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvgInvestmentEvent {
    ManualEdit,
    HistoricalApplied,
}

impl AvgInvestmentSource {
    /// Transition table.
    ///
    /// | from \ event        | `ManualEdit` | `HistoricalApplied`  |
    /// |---------------------|--------------|----------------------|
    /// | `Manual`            | `Manual`     | `HistoricalDerived`  |
    /// | `HistoricalDerived` | `Manual`     | `HistoricalDerived`  |
    pub fn next(
        self,
        event: AvgInvestmentEvent,
    ) -> Self {
        match (self, event) {
            (_, AvgInvestmentEvent::ManualEdit) => Self::Manual,
            (_, AvgInvestmentEvent::HistoricalApplied) => Self::HistoricalDerived,
        }
    }

    pub fn has_historical_data(self) -> bool {
        matches!(self, Self::HistoricalDerived)
    }
}

/// Which chart the presentation layer should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    /// Current pipeline vs. a pipeline half again as large.
    Comparison,
    /// All-time (historical) earnings vs. future earnings.
    Breakdown,
}

impl From<AvgInvestmentSource> for ViewMode {
    fn from(source: AvgInvestmentSource) -> Self {
        if source.has_historical_data() {
            Self::Breakdown
        } else {
            Self::Comparison
        }
    }
}
