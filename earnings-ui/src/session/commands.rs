//! Line commands understood by the terminal session.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),

    #[error("'{0}' needs a value")]
    MissingValue(&'static str),
}

/// One user event. Values stay as raw text; the controller does the coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Pending(String),
    Slide(String),
    Rate(String),
    Avg(String),
    OpenCalculate,
    Earnings(String),
    Onboarded(String),
    Apply,
    Cancel,
    Link,
    Show,
    LogLevel(String),
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Returns `Ok(None)` for blank lines and `#` comments.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "pending" => Self::Pending(rest.to_string()),
            "slide" => Self::Slide(required(rest, "slide")?),
            "rate" => Self::Rate(rest.to_string()),
            "avg" => Self::Avg(rest.to_string()),
            "calc" | "calculate" => Self::OpenCalculate,
            "earnings" => Self::Earnings(rest.to_string()),
            "onboarded" => Self::Onboarded(rest.to_string()),
            "apply" => Self::Apply,
            "cancel" | "close" => Self::Cancel,
            "link" | "convert" => Self::Link,
            "show" => Self::Show,
            "log" => Self::LogLevel(required(rest, "log")?),
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn required(
    rest: &str,
    command: &'static str,
) -> Result<String, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingValue(command))
    } else {
        Ok(rest.to_string())
    }
}
