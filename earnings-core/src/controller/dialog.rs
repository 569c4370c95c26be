//! Historical override dialog state machine.
//!
//! ```text
//!            open                      apply (ok) / cancel
//! Closed ───────────► Open { error: None } ───────────────► Closed
//!                       │      ▲
//!                       └──────┘
//!                  apply (err): error = Some(..)
//! ```

use crate::HistoricalOverrideError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HistoricalDialog {
    #[default]
    Closed,
    Open {
        earnings_input: String,
        onboarded_input: String,
        error: Option<HistoricalOverrideError>,
    },
}

impl HistoricalDialog {
    /// Opens a fresh dialog. Any stale error or text is dropped.
    pub fn open(&mut self) {
        *self = Self::Open {
            earnings_input: String::new(),
            onboarded_input: String::new(),
            error: None,
        };
    }

    /// Closes the dialog, discarding pending text.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Replaces the earnings text. Ignored while closed.
    pub fn set_earnings_input(
        &mut self,
        text: &str,
    ) {
        if let Self::Open { earnings_input, .. } = self {
            *earnings_input = text.to_string();
        }
    }

    /// Replaces the onboarded text. Ignored while closed.
    pub fn set_onboarded_input(
        &mut self,
        text: &str,
    ) {
        if let Self::Open {
            onboarded_input, ..
        } = self
        {
            *onboarded_input = text.to_string();
        }
    }

    /// Records a failed apply. The dialog stays open with its text intact.
    pub fn fail(
        &mut self,
        err: HistoricalOverrideError,
    ) {
        if let Self::Open { error, .. } = self {
            *error = Some(err);
        }
    }

    pub fn error(&self) -> Option<HistoricalOverrideError> {
        match self {
            Self::Open { error, .. } => *error,
            Self::Closed => None,
        }
    }

    /// `(earnings, onboarded)` text while open.
    pub fn inputs(&self) -> Option<(&str, &str)> {
        match self {
            Self::Open {
                earnings_input,
                onboarded_input,
                ..
            } => Some((earnings_input.as_str(), onboarded_input.as_str())),
            Self::Closed => None,
        }
    }

    /// Whether the Apply action is offered: both fields non-blank.
    ///
    /// Only an affordance; the values are still validated on apply.
    pub fn apply_enabled(&self) -> bool {
        self.inputs()
            .is_some_and(|(e, o)| !e.trim().is_empty() && !o.trim().is_empty())
    }
}
