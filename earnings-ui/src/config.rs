//! Calculator configuration.
//!
//! Loaded from an optional TOML file. Every field has a default, so an empty
//! file (or no file at all) yields the stock calculator.
//!
//! ```toml
//! [defaults]
//! pending_users = 10
//! avg_investment = 400.0
//! commission_rate = 20
//!
//! [cta]
//! label = "Convert now"
//! url = "https://wa.me/1234567890?text=I%20want%20to%20convert%20my%20potential%20customers"
//!
//! [format]
//! currency_symbol = "₹"
//! grouping = "indian"   # or "western"
//! ```

use std::{fmt, fs, io, path::Path, path::PathBuf};

use earnings_core::{CalculatorController, Inputs, NumberFormat};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_CTA_LABEL: &str = "Convert now";
pub const DEFAULT_CTA_URL: &str =
    "https://wa.me/1234567890?text=I%20want%20to%20convert%20my%20potential%20customers";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Starting values for a new session.
///
/// Kept wide so any number parses; the controller clamps like user entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub pending_users: i64,
    pub avg_investment: f64,
    pub commission_rate: i64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let inputs = Inputs::default();
        Self {
            pending_users: i64::from(inputs.pending_users),
            avg_investment: inputs.avg_investment,
            commission_rate: i64::from(inputs.commission_rate),
        }
    }
}

/// Call-to-action link shown under the chart.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CtaConfig {
    pub label: String,
    pub url: String,
}

impl Default for CtaConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_CTA_LABEL.to_string(),
            url: DEFAULT_CTA_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub defaults: DefaultsConfig,
    pub cta: CtaConfig,
    pub format: NumberFormat,
}

impl AppConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Loads configuration from `path`, or the defaults when `path` is `None`
    /// or does not exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Builds a controller seeded with the configured defaults.
    pub fn controller(&self) -> CalculatorController {
        let mut controller = CalculatorController::default();
        controller.set_pending_users(self.defaults.pending_users as f64);
        controller.set_commission_rate(self.defaults.commission_rate);
        controller.set_avg_investment_manual(self.defaults.avg_investment);
        controller
    }
}

impl fmt::Display for AppConfig {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Pending users:   {}", self.defaults.pending_users)?;
        writeln!(f, "Avg investment:  {}", self.defaults.avg_investment)?;
        writeln!(f, "Commission rate: {}%", self.defaults.commission_rate)?;
        writeln!(f, "CTA:             {} -> {}", self.cta.label, self.cta.url)?;
        write!(
            f,
            "Format:          {} ({:?})",
            self.format.currency_symbol, self.format.grouping
        )
    }
}

#[cfg(test)]
mod tests {
    use earnings_core::Grouping;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = AppConfig::from_toml("").unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.cta.url, DEFAULT_CTA_URL);
        assert_eq!(config.format.grouping, Grouping::Indian);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [defaults]
            commission_rate = 35

            [format]
            grouping = "western"
            currency_symbol = "$"
            "#,
        )
        .unwrap();

        assert_eq!(config.defaults.commission_rate, 35);
        assert_eq!(config.defaults.pending_users, 10);
        assert_eq!(config.format.grouping, Grouping::Western);
        assert_eq!(config.format.currency_symbol, "$");
        assert_eq!(config.cta, CtaConfig::default());
    }

    #[test]
    fn cta_can_be_replaced() {
        let config = AppConfig::from_toml(
            r#"
            [cta]
            url = "https://example.com/signup"
            "#,
        )
        .unwrap();

        assert_eq!(config.cta.url, "https://example.com/signup");
        assert_eq!(config.cta.label, DEFAULT_CTA_LABEL);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(AppConfig::from_toml("[defaults\npending_users = ").is_err());
    }

    #[test]
    fn unknown_grouping_is_an_error() {
        assert!(AppConfig::from_toml("[format]\ngrouping = \"metric\"").is_err());
    }

    #[test]
    fn out_of_range_defaults_are_clamped_by_controller() {
        let config = AppConfig::from_toml(
            r#"
            [defaults]
            pending_users = 0
            commission_rate = 5
            avg_investment = -20.0
            "#,
        )
        .unwrap();

        let controller = config.controller();

        assert_eq!(
            *controller.inputs(),
            Inputs {
                pending_users: 1,
                avg_investment: 0.0,
                commission_rate: 20,
            }
        );
    }

    #[test]
    fn defaults_outside_input_types_are_clamped() {
        let config = AppConfig::from_toml(
            r#"
            [defaults]
            pending_users = -5
            commission_rate = 300
            "#,
        )
        .unwrap();

        let controller = config.controller();

        assert_eq!(controller.inputs().pending_users, 1);
        assert_eq!(controller.inputs().commission_rate, 50);
        assert_eq!(controller.inputs().avg_investment, 400.0);
    }

    #[test]
    fn load_without_path_uses_defaults() {
        assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
    }

    #[test]
    fn load_missing_file_uses_defaults() {
        let path = Path::new("/this/path/does/not/exist.toml");

        assert_eq!(AppConfig::load(Some(path)).unwrap(), AppConfig::default());
    }
}
