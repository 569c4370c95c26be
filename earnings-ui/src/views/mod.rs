//! Text rendering of the calculator.
//!
//! Every function here is a pure function of a [`CalculatorSnapshot`](earnings_core::CalculatorSnapshot)
//! and returns the text to print; nothing writes to the terminal directly.

pub mod calculator;
pub mod chart;
pub mod dialog;
pub mod status_bar;

pub use calculator::render_calculator;
pub use dialog::render_dialog;
