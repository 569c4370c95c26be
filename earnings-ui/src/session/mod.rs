//! Line-oriented calculator session.
//!
//! Reads one [`Command`] per line, applies it to the controller and writes
//! the re-rendered calculator. Bad input never ends the session.

mod commands;

use std::io::{BufRead, Write};

use anyhow::Result;
use earnings_core::CalculatorController;
use earnings_core::input::parse_number;
use tracing::{debug, info, warn};

pub use commands::{Command, CommandError};

use crate::config::AppConfig;
use crate::logging;
use crate::views::{render_calculator, render_dialog};

const HELP: &str = "\
Commands:
  pending <n>        pending conversions (at least 1)
  slide <n>          pending conversions via the slider (1-500)
  rate <n>           commission rate in percent (20-50)
  avg <amount>       average investment per person per month
  calc               open \"Let's Calculate\"
  earnings <amount>  total historical earnings (dialog)
  onboarded <n>      total successfully onboarded (dialog)
  apply              apply historical numbers (dialog)
  cancel             close the dialog
  link               show the call-to-action link
  show               redraw
  log <level>        change log level (e.g. debug)
  quit               exit";

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// State may have changed; redraw.
    Render,
    /// Print this line; nothing to redraw.
    Message(String),
    Quit,
}

pub struct Session {
    controller: CalculatorController,
    config: AppConfig,
}

impl Session {
    pub fn new(config: AppConfig) -> Self {
        Self {
            controller: config.controller(),
            config,
        }
    }

    pub fn controller(&self) -> &CalculatorController {
        &self.controller
    }

    /// Calculator panel, followed by the dialog when it is open.
    pub fn render(&self) -> String {
        let snapshot = self.controller.snapshot();
        let mut out = render_calculator(&snapshot, &self.config.format, &self.config.cta);
        if let Some(dialog) = render_dialog(&snapshot.dialog) {
            out.push('\n');
            out.push_str(&dialog);
        }
        out
    }

    pub fn handle(
        &mut self,
        command: Command,
    ) -> SessionOutcome {
        debug!(?command, "handling command");
        match command {
            Command::Pending(text) => self.controller.set_pending_users_text(&text),
            Command::Slide(text) => match parse_number(&text) {
                Some(value) => self.controller.slide_pending_users(value),
                None => return SessionOutcome::Message(format!("'{text}' is not a slider position")),
            },
            Command::Rate(text) => self.controller.set_commission_rate_text(&text),
            Command::Avg(text) => self.controller.set_avg_investment_text(&text),
            Command::OpenCalculate => self.controller.open_historical_dialog(),
            Command::Earnings(text) | Command::Onboarded(text) if !self.controller.dialog().is_open() => {
                warn!(input = %text, "dialog is closed");
                return SessionOutcome::Message("Open the dialog first with 'calc'.".to_string());
            }
            Command::Earnings(text) => self.controller.edit_historical_earnings(&text),
            Command::Onboarded(text) => self.controller.edit_historical_onboarded(&text),
            Command::Apply => {
                if !self.controller.dialog().apply_enabled() {
                    return SessionOutcome::Message(
                        "Apply is available once both values are entered.".to_string(),
                    );
                }
                // Failures are shown inside the dialog.
                if let Ok(Some(record)) = self.controller.submit_historical_dialog() {
                    info!(
                        total_earnings = record.total_earnings,
                        total_onboarded = record.total_onboarded,
                        "historical numbers applied"
                    );
                }
            }
            Command::Cancel => self.controller.cancel_historical_dialog(),
            Command::Link => {
                return SessionOutcome::Message(format!(
                    "{}: {}",
                    self.config.cta.label, self.config.cta.url
                ));
            }
            Command::Show => {}
            Command::LogLevel(level) => {
                return SessionOutcome::Message(match logging::set_log_level(&level) {
                    Ok(()) => format!("log level set to '{level}'"),
                    Err(e) => e.to_string(),
                });
            }
            Command::Help => return SessionOutcome::Message(HELP.to_string()),
            Command::Quit => return SessionOutcome::Quit,
        }
        SessionOutcome::Render
    }

    /// Runs until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        output: &mut W,
    ) -> Result<()> {
        info!("session started");
        writeln!(output, "{}", self.render())?;

        let mut raw = Vec::new();
        loop {
            raw.clear();
            if input.read_until(b'\n', &mut raw)? == 0 {
                break;
            }
            // Invalid UTF-8 becomes U+FFFD and falls through as an unknown command.
            let line = String::from_utf8_lossy(&raw);
            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(output, "{e}")?;
                    continue;
                }
            };

            match self.handle(command) {
                SessionOutcome::Render => writeln!(output, "{}", self.render())?,
                SessionOutcome::Message(message) => writeln!(output, "{message}")?,
                SessionOutcome::Quit => break,
            }
            output.flush()?;
        }

        info!("session ended");
        Ok(())
    }
}
