//! Calculator controller.
//!
//! [`CalculatorController`] is the single owner of session state. Every
//! mutation goes through one of its setters, which clamp and coerce their
//! input so the state invariants always hold:
//!
//! - pending users ≥ 1 (only the slider caps at 500)
//! - commission rate in 20..=50
//! - average investment finite and ≥ 0
//!
//! Derived figures and chart data are rebuilt from state on every read.

mod dialog;

use tracing::{debug, warn};

pub use dialog::HistoricalDialog;

use crate::calculations::common::non_negative;
use crate::calculations::project;
use crate::charts::{ChartView, slider_fill_percent};
use crate::input::{parse_leading_int, parse_number};
use crate::{
    AvgInvestmentEvent, CalculatorState, COMMISSION_RATE_MAX, COMMISSION_RATE_MIN,
    DerivedProjection, HistoricalOverrideError, HistoricalRecord, Inputs, PENDING_USERS_MIN,
    PENDING_USERS_SLIDER_MAX, ViewMode,
};

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorSnapshot {
    pub inputs: Inputs,
    pub projection: DerivedProjection,
    pub all_time_earnings: f64,
    pub view_mode: ViewMode,
    pub chart: ChartView,
    pub slider_fill_percent: f64,
    pub dialog: HistoricalDialog,
}

#[derive(Debug, Clone, Default)]
pub struct CalculatorController {
    state: CalculatorState,
    dialog: HistoricalDialog,
}

impl CalculatorController {
    /// Creates a controller seeded with `inputs`, passed through the same
    /// clamping as user entry.
    pub fn new(inputs: Inputs) -> Self {
        let mut controller = Self::default();
        controller.set_pending_users(f64::from(inputs.pending_users));
        controller.set_commission_rate(i64::from(inputs.commission_rate));
        controller.set_avg_investment_manual(inputs.avg_investment);
        controller
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn inputs(&self) -> &Inputs {
        &self.state.inputs
    }

    pub fn dialog(&self) -> &HistoricalDialog {
        &self.dialog
    }

    pub fn has_historical_data(&self) -> bool {
        self.state.has_historical_data()
    }

    pub fn all_time_earnings(&self) -> f64 {
        self.state.all_time_earnings
    }

    pub fn view_mode(&self) -> ViewMode {
        self.state.view_mode()
    }

    pub fn projection(&self) -> DerivedProjection {
        project(&self.state.inputs)
    }

    pub fn chart(&self) -> ChartView {
        ChartView::build(
            self.view_mode(),
            self.state.inputs.pending_users,
            self.state.all_time_earnings,
            &self.projection(),
        )
    }

    pub fn snapshot(&self) -> CalculatorSnapshot {
        CalculatorSnapshot {
            inputs: self.state.inputs,
            projection: self.projection(),
            all_time_earnings: self.state.all_time_earnings,
            view_mode: self.view_mode(),
            chart: self.chart(),
            slider_fill_percent: slider_fill_percent(self.state.inputs.pending_users),
            dialog: self.dialog.clone(),
        }
    }

    // ─── inputs ──────────────────────────────────────────────────────────────

    /// Sets pending users from direct entry.
    ///
    /// Floors at 1 with no upper bound. Fractions are truncated and
    /// non-finite values become 1.
    pub fn set_pending_users(
        &mut self,
        value: f64,
    ) {
        let whole = if value.is_finite() { value.trunc() } else { 1.0 };
        // `as` saturates at u32::MAX.
        let pending = whole.max(f64::from(PENDING_USERS_MIN)) as u32;
        debug!(pending, "pending users set");
        self.state.inputs.pending_users = pending;
    }

    /// Text entry for pending users. Unparseable text counts as 1.
    pub fn set_pending_users_text(
        &mut self,
        text: &str,
    ) {
        self.set_pending_users(parse_number(text).unwrap_or(1.0));
    }

    /// Slider entry for pending users, bounded to the slider track.
    pub fn slide_pending_users(
        &mut self,
        value: f64,
    ) {
        let max = f64::from(PENDING_USERS_SLIDER_MAX);
        let bounded = if value.is_finite() { value.min(max) } else { 1.0 };
        self.set_pending_users(bounded);
    }

    /// Sets the commission rate, clamped to 20..=50.
    pub fn set_commission_rate(
        &mut self,
        value: i64,
    ) {
        let rate = value.clamp(
            i64::from(COMMISSION_RATE_MIN),
            i64::from(COMMISSION_RATE_MAX),
        ) as u8;
        debug!(rate, "commission rate set");
        self.state.inputs.commission_rate = rate;
    }

    /// Text entry for the commission rate. Non-numeric text is ignored.
    pub fn set_commission_rate_text(
        &mut self,
        text: &str,
    ) {
        match parse_leading_int(text) {
            Some(value) => self.set_commission_rate(value),
            None => debug!(input = %text, "ignoring non-numeric commission rate"),
        }
    }

    /// Manual edit of the average investment. Always leaves historical mode.
    ///
    /// The retained all-time earnings figure is not reset.
    pub fn set_avg_investment_manual(
        &mut self,
        value: f64,
    ) {
        self.state.inputs.avg_investment = non_negative(value);
        self.transition(AvgInvestmentEvent::ManualEdit);
    }

    /// Text entry for the average investment. Unparseable text counts as 0.
    pub fn set_avg_investment_text(
        &mut self,
        text: &str,
    ) {
        self.set_avg_investment_manual(parse_number(text).unwrap_or(0.0));
    }

    // ─── historical override ─────────────────────────────────────────────────

    pub fn open_historical_dialog(&mut self) {
        debug!("historical dialog opened");
        self.dialog.open();
    }

    /// Closes the dialog without touching calculator state.
    pub fn cancel_historical_dialog(&mut self) {
        debug!("historical dialog cancelled");
        self.dialog.close();
    }

    pub fn edit_historical_earnings(
        &mut self,
        text: &str,
    ) {
        self.dialog.set_earnings_input(text);
    }

    pub fn edit_historical_onboarded(
        &mut self,
        text: &str,
    ) {
        self.dialog.set_onboarded_input(text);
    }

    /// Derives the average investment from historical totals.
    ///
    /// On success the average investment and all-time earnings are replaced,
    /// the view switches to the breakdown and the dialog closes.
    ///
    /// # Errors
    ///
    /// Returns the field-specific [`HistoricalOverrideError`] and leaves state
    /// untouched. An open dialog stays open and shows the error.
    pub fn apply_historical_override(
        &mut self,
        earnings: &str,
        onboarded: &str,
    ) -> Result<HistoricalRecord, HistoricalOverrideError> {
        let record = match HistoricalRecord::parse(earnings, onboarded) {
            Ok(record) => record,
            Err(err) => {
                warn!(earnings, onboarded, %err, "historical override rejected");
                self.dialog.fail(err);
                return Err(err);
            }
        };

        self.state.inputs.avg_investment = record.average_investment();
        self.state.all_time_earnings = non_negative(record.total_earnings);
        self.transition(AvgInvestmentEvent::HistoricalApplied);
        self.dialog.close();
        debug!(
            avg_investment = self.state.inputs.avg_investment,
            all_time_earnings = self.state.all_time_earnings,
            "historical override applied"
        );
        Ok(record)
    }

    /// Applies the text currently held by the dialog.
    ///
    /// Returns `Ok(None)` when the dialog is closed or Apply is not enabled.
    pub fn submit_historical_dialog(
        &mut self,
    ) -> Result<Option<HistoricalRecord>, HistoricalOverrideError> {
        if !self.dialog.apply_enabled() {
            warn!(open = self.dialog.is_open(), "apply is not available");
            return Ok(None);
        }
        let (earnings, onboarded) = match self.dialog.inputs() {
            Some((e, o)) => (e.to_string(), o.to_string()),
            None => return Ok(None),
        };
        self.apply_historical_override(&earnings, &onboarded)
            .map(Some)
    }

    fn transition(
        &mut self,
        event: AvgInvestmentEvent,
    ) {
        let from = self.state.avg_source;
        self.state.avg_source = from.next(event);
        if from != self.state.avg_source {
            debug!(?from, to = ?self.state.avg_source, ?event, "avg investment source changed");
        }
    }
}
