//! Integration tests that drive a full session from on-disk fixtures.
//!
//! These complement the unit tests inside session/ by running a scripted
//! session end-to-end through `Session::run` and checking both the final
//! controller state and the rendered output.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use approx::assert_relative_eq;
use earnings_core::{AvgInvestmentSource, ViewMode};
use earnings_ui::{AppConfig, Session};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run_script(
    config: AppConfig,
    script: &str,
) -> (Session, String) {
    let mut session = Session::new(config);
    let file = File::open(fixture(script)).expect("fixture script should open");
    let mut output = Vec::new();

    session
        .run(BufReader::new(file), &mut output)
        .expect("session should run to completion");

    (session, String::from_utf8(output).unwrap())
}

#[test]
fn test_historical_session_final_state() {
    let (session, _) = run_script(AppConfig::default(), "historical_session.txt");
    let controller = session.controller();

    assert_eq!(controller.inputs().pending_users, 20);
    assert_eq!(controller.inputs().commission_rate, 20); // 10 clamped up
    assert_eq!(controller.inputs().avg_investment, 600.0);

    // Manual edit leaves historical mode but keeps the all-time figure.
    assert_eq!(controller.state().avg_source, AvgInvestmentSource::Manual);
    assert_eq!(controller.view_mode(), ViewMode::Comparison);
    assert_eq!(controller.all_time_earnings(), 9000.0);
    assert!(!controller.dialog().is_open());
}

#[test]
fn test_historical_session_output_shows_each_stage() {
    let (_, output) = run_script(AppConfig::default(), "historical_session.txt");

    // Rejected override surfaces the earnings error.
    assert!(output.contains("! Enter a valid positive amount for earnings."));
    // 9000 / 12 = 750, breakdown view with all-time earnings.
    assert!(output.contains("₹750  (from history)"));
    assert!(output.contains("All Time Earnings"));
    assert!(output.contains("₹9,000"));
    // Final manual edit: 20 * 600 * 0.2 = 2400.
    assert!(output.contains("₹2,400"));
}

#[test]
fn test_config_fixture_seeds_session() {
    let path = fixture("western.toml");
    let config = AppConfig::load(Some(path.as_path())).expect("config fixture should load");
    let session = Session::new(config);
    let projection = session.controller().projection();

    // 40 * 250 * 0.35 = 3500; grown pipeline 60 * 250 * 0.35 = 5250.
    assert_relative_eq!(projection.future_earnings, 3500.0);
    assert_relative_eq!(projection.max_projection, 5250.0);

    let text = session.render();
    assert!(text.contains("$3,500"));
    assert!(text.contains("$5,250"));
    assert!(text.contains("Projected (60)"));
    assert!(text.contains("Talk to us: https://example.com/partners"));
}
