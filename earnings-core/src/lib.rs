pub mod calculations;
pub mod charts;
pub mod controller;
pub mod format;
pub mod input;
pub mod models;

pub use controller::{CalculatorController, CalculatorSnapshot, HistoricalDialog};
pub use format::{Grouping, NumberFormat, format_currency, format_number};
pub use models::*;
