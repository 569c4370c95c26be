//! Chart-ready datasets for the two interchangeable views.

use serde::Serialize;

use crate::calculations::projected_pending_users;
use crate::format::NumberFormat;
use crate::{DerivedProjection, PENDING_USERS_MIN, PENDING_USERS_SLIDER_MAX, ViewMode};

pub const PRIMARY_GREEN: &str = "#00D09C";
pub const ACCENT_RED: &str = "#EB5B3C";
pub const GREY: &str = "#E5E7EB";

/// One slice or bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartEntry {
    pub name: String,
    pub value: f64,
    /// Hex fill colour.
    pub fill: &'static str,
}

impl ChartEntry {
    /// Value label / tooltip text.
    pub fn label(
        &self,
        format: &NumberFormat,
    ) -> String {
        format.currency(self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ChartView {
    /// All-time earnings vs. future earnings (two slices).
    Breakdown([ChartEntry; 2]),
    /// Current pipeline vs. grown pipeline (two bars).
    Comparison([ChartEntry; 2]),
}

impl ChartView {
    pub fn build(
        mode: ViewMode,
        pending_users: u32,
        all_time_earnings: f64,
        projection: &DerivedProjection,
    ) -> Self {
        match mode {
            ViewMode::Breakdown => Self::Breakdown(breakdown_slices(
                all_time_earnings,
                projection.future_earnings,
            )),
            ViewMode::Comparison => Self::Comparison(comparison_bars(pending_users, projection)),
        }
    }

    pub fn entries(&self) -> &[ChartEntry] {
        match self {
            Self::Breakdown(entries) | Self::Comparison(entries) => entries,
        }
    }

    pub fn mode(&self) -> ViewMode {
        match self {
            Self::Breakdown(_) => ViewMode::Breakdown,
            Self::Comparison(_) => ViewMode::Comparison,
        }
    }

    /// Largest entry value, used to scale bars. Never below zero.
    pub fn max_value(&self) -> f64 {
        self.entries()
            .iter()
            .map(|e| e.value)
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    }
}

pub fn breakdown_slices(
    all_time_earnings: f64,
    future_earnings: f64,
) -> [ChartEntry; 2] {
    [
        ChartEntry {
            name: "All Time Earnings".to_string(),
            value: all_time_earnings,
            fill: PRIMARY_GREEN,
        },
        ChartEntry {
            name: "Future Earnings".to_string(),
            value: future_earnings,
            fill: ACCENT_RED,
        },
    ]
}

pub fn comparison_bars(
    pending_users: u32,
    projection: &DerivedProjection,
) -> [ChartEntry; 2] {
    [
        ChartEntry {
            name: format!("Current ({pending_users})"),
            value: projection.future_earnings,
            fill: PRIMARY_GREEN,
        },
        ChartEntry {
            name: format!("Projected ({})", projected_pending_users(pending_users)),
            value: projection.max_projection,
            fill: GREY,
        },
    ]
}

/// Filled share of the pending users slider track, in percent (0–100).
pub fn slider_fill_percent(pending_users: u32) -> f64 {
    let span = f64::from(PENDING_USERS_SLIDER_MAX - PENDING_USERS_MIN);
    let offset = f64::from(pending_users.saturating_sub(PENDING_USERS_MIN));
    (offset / span * 100.0).clamp(0.0, 100.0)
}
