pub mod config;
pub mod logging;
pub mod session;
pub mod views;

pub use config::{AppConfig, ConfigError};
pub use session::{Session, SessionOutcome};
