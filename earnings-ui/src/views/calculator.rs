//! Main calculator panel: inputs, future earnings, chart and call to action.

use earnings_core::{CalculatorSnapshot, NumberFormat, ViewMode};

use super::chart::{filled_cells, render_chart};
use super::status_bar::{build_status_bar, hints};
use crate::config::CtaConfig;

const SLIDER_WIDTH: usize = 30;
const RULE_WIDTH: usize = 60;

pub fn render_calculator(
    snapshot: &CalculatorSnapshot,
    format: &NumberFormat,
    cta: &CtaConfig,
) -> String {
    let inputs = &snapshot.inputs;
    let source_note = match snapshot.view_mode {
        ViewMode::Breakdown => "  (from history)",
        ViewMode::Comparison => "",
    };
    let chart_title = match snapshot.view_mode {
        ViewMode::Breakdown => "All time vs. future earnings",
        ViewMode::Comparison => "Current vs. projected pipeline",
    };

    let mut out = String::new();
    out.push_str("Partner Potential Calculator\n");
    out.push_str("Visualize your potential earnings and convert pending users faster.\n");
    out.push_str(&"─".repeat(RULE_WIDTH));
    out.push('\n');

    out.push_str("Input your pending pipeline\n");
    out.push_str(&format!(
        "  Commission Rate                   {}%\n",
        inputs.commission_rate
    ));
    out.push_str(&format!(
        "  Avg Investment / Person / month   {}{source_note}\n",
        format.currency(inputs.avg_investment)
    ));
    out.push_str(&format!(
        "  Pending Conversions               {}\n",
        format.number(f64::from(inputs.pending_users))
    ));
    out.push_str(&format!(
        "  {}\n",
        slider(snapshot.slider_fill_percent)
    ));
    out.push('\n');

    out.push_str("Future Earnings\n");
    out.push_str(&format!(
        "  {}\n",
        format.currency(snapshot.projection.future_earnings)
    ));
    out.push_str(&format!(
        "  range {} – {}\n\n",
        format.currency(snapshot.projection.min_projection),
        format.currency(snapshot.projection.max_projection)
    ));

    out.push_str(&format!("{chart_title}\n"));
    out.push_str(&render_chart(&snapshot.chart, format));
    out.push('\n');

    out.push_str(&format!("{}: {}\n", cta.label, cta.url));
    out.push_str(&"─".repeat(RULE_WIDTH));
    out.push('\n');
    out.push_str(&build_status_bar(&[
        hints::PENDING,
        hints::RATE,
        hints::AVG,
        hints::CALC,
        hints::LINK,
        hints::QUIT,
    ]));
    out.push('\n');
    out
}

/// Slider track for pending conversions, `1 [■■■·····] 500`.
fn slider(fill_percent: f64) -> String {
    let cells = filled_cells(fill_percent, 100.0, SLIDER_WIDTH);
    format!(
        "1 [{}{}] 500",
        "■".repeat(cells),
        "·".repeat(SLIDER_WIDTH - cells)
    )
}
