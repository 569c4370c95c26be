use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use earnings_ui::{AppConfig, Session, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Partner earnings calculator.
///
/// Enter your pending pipeline and see projected partner earnings. Reads one
/// command per line from stdin (or a script file); type `help` for the list.
#[derive(Debug, Parser)]
struct Cli {
    /// TOML config with defaults, call-to-action link and number format.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read commands from this file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Log filter directive (e.g. `debug`, `info,earnings_core=debug`).
    /// Overrides `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Suppress log output on stderr.
    #[arg(long)]
    quiet: bool,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref())?;
    if cli.quiet {
        logging::set_console_enabled(false)?;
    }
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let config = AppConfig::load(cli.config.as_deref())?;
    debug!("config:\n{}", config);

    let mut session = Session::new(config);
    let mut stdout = io::stdout().lock();

    match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open script '{}'", path.display()))?;
            session.run(BufReader::new(file), &mut stdout)?;
        }
        None => session.run(io::stdin().lock(), &mut stdout)?,
    }

    logging::disable_file_logging();
    Ok(())
}
