mod calculator_state;
mod historical_record;
mod inputs;
mod projection;
mod view_mode;

pub use calculator_state::CalculatorState;
pub use historical_record::{HistoricalOverrideError, HistoricalRecord};
pub use inputs::{
    COMMISSION_RATE_MAX, COMMISSION_RATE_MIN, Inputs, PENDING_USERS_MIN, PENDING_USERS_SLIDER_MAX,
};
pub use projection::DerivedProjection;
pub use view_mode::{AvgInvestmentEvent, AvgInvestmentSource, ViewMode};
