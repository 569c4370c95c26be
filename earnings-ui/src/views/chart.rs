//! Text charts for the comparison and breakdown views.

use earnings_core::NumberFormat;
use earnings_core::charts::{ChartEntry, ChartView};

const BAR_WIDTH: usize = 40;

pub fn render_chart(
    chart: &ChartView,
    format: &NumberFormat,
) -> String {
    match chart {
        ChartView::Comparison(bars) => render_bars(bars, chart.max_value(), format),
        ChartView::Breakdown(slices) => render_breakdown(slices, format),
    }
}

/// Cells filled for `value` on a track of `width` scaled to `max`.
pub fn filled_cells(
    value: f64,
    max: f64,
    width: usize,
) -> usize {
    if !(value.is_finite() && max.is_finite()) || max <= 0.0 || value <= 0.0 {
        return 0;
    }
    let cells = (value / max * width as f64).round() as usize;
    cells.min(width)
}

fn render_bars(
    bars: &[ChartEntry],
    max: f64,
    format: &NumberFormat,
) -> String {
    let name_width = bars.iter().map(|b| b.name.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    for bar in bars {
        let cells = filled_cells(bar.value, max, BAR_WIDTH);
        out.push_str(&format!(
            "  {:<name_width$}  {}{}  {}\n",
            bar.name,
            "█".repeat(cells),
            " ".repeat(BAR_WIDTH - cells),
            bar.label(format),
        ));
    }
    out.push_str(&format!(
        "  {:<name_width$}  0{:>mid$}{:>end$}\n",
        "",
        format.number(max / 2.0),
        format.number(max),
        mid = BAR_WIDTH / 2,
        end = BAR_WIDTH / 2,
    ));
    out
}

fn render_breakdown(
    slices: &[ChartEntry],
    format: &NumberFormat,
) -> String {
    let total: f64 = slices
        .iter()
        .map(|s| s.value)
        .filter(|v| v.is_finite() && *v > 0.0)
        .sum();
    let name_width = slices.iter().map(|s| s.name.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    let mut track = String::new();
    let mut used = 0;
    for (i, slice) in slices.iter().enumerate() {
        let share = share_percent(slice.value, total);
        out.push_str(&format!(
            "  {:<name_width$}  {:>12}  {:>3.0}%\n",
            slice.name,
            slice.label(format),
            share,
        ));
        // Last slice takes the remainder so the track is always full.
        let cells = if i + 1 == slices.len() && total > 0.0 {
            BAR_WIDTH - used
        } else {
            filled_cells(slice.value, total, BAR_WIDTH).min(BAR_WIDTH - used)
        };
        let glyph = if i % 2 == 0 { "█" } else { "▒" };
        track.push_str(&glyph.repeat(cells));
        used += cells;
    }
    track.push_str(&"░".repeat(BAR_WIDTH - used));
    out.push_str(&format!("  [{track}]\n"));
    out
}

fn share_percent(
    value: f64,
    total: f64,
) -> f64 {
    if total > 0.0 && value.is_finite() && value > 0.0 {
        value / total * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use earnings_core::DerivedProjection;
    use earnings_core::charts::{breakdown_slices, comparison_bars};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn filled_cells_scales_to_width() {
        assert_eq!(filled_cells(50.0, 100.0, 40), 20);
        assert_eq!(filled_cells(100.0, 100.0, 40), 40);
    }

    #[test]
    fn filled_cells_handles_empty_and_bad_values() {
        assert_eq!(filled_cells(0.0, 0.0, 40), 0);
        assert_eq!(filled_cells(f64::NAN, 100.0, 40), 0);
        assert_eq!(filled_cells(10.0, f64::INFINITY, 40), 0);
    }

    #[test]
    fn comparison_renders_labels_and_axis() {
        let projection = DerivedProjection {
            future_earnings: 800.0,
            min_projection: 800.0,
            max_projection: 1200.0,
        };
        let chart = ChartView::Comparison(comparison_bars(10, &projection));

        let text = render_chart(&chart, &NumberFormat::default());

        assert!(text.contains("Current (10)"));
        assert!(text.contains("Projected (15)"));
        assert!(text.contains("₹800"));
        assert!(text.contains("₹1,200"));
        assert!(text.contains("1,200\n"));
    }

    #[test]
    fn breakdown_renders_shares() {
        let chart = ChartView::Breakdown(breakdown_slices(3000.0, 1000.0));

        let text = render_chart(&chart, &NumberFormat::default());

        assert!(text.contains("₹3,000"));
        assert!(text.contains(" 75%"));
        assert!(text.contains(" 25%"));
        assert!(!text.contains('░'));
    }

    #[test]
    fn breakdown_with_nothing_to_show_is_empty_track() {
        let chart = ChartView::Breakdown(breakdown_slices(0.0, 0.0));

        let text = render_chart(&chart, &NumberFormat::default());

        assert!(text.contains(&format!("[{}]", "░".repeat(BAR_WIDTH))));
        assert!(text.contains("  0%"));
    }
}
