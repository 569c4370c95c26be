//! "Let's Calculate" dialog.

use earnings_core::HistoricalDialog;

use super::status_bar::{build_status_bar, hints};

/// Renders the dialog, or `None` while it is closed.
pub fn render_dialog(dialog: &HistoricalDialog) -> Option<String> {
    let (earnings, onboarded) = dialog.inputs()?;

    let mut out = String::new();
    out.push_str("┌ Let's Calculate\n");
    out.push_str("│ Derive average investment from your historical numbers.\n");
    out.push_str(&format!("│ Total Historical Earnings     {earnings}\n"));
    out.push_str(&format!("│ Total Successfully Onboarded  {onboarded}\n"));
    if let Some(error) = dialog.error() {
        out.push_str(&format!("│ ! {error}\n"));
    }
    if dialog.apply_enabled() {
        out.push_str("│ [ Apply ]\n");
    } else {
        out.push_str("│ [ Apply ] (enter both values)\n");
    }
    out.push_str(&format!(
        "└ {}\n",
        build_status_bar(&[
            hints::EARNINGS,
            hints::ONBOARDED,
            hints::APPLY,
            hints::CANCEL
        ])
    ));
    Some(out)
}

#[cfg(test)]
mod tests {
    use earnings_core::HistoricalOverrideError;

    use super::*;

    #[test]
    fn closed_dialog_renders_nothing() {
        assert!(render_dialog(&HistoricalDialog::Closed).is_none());
    }

    #[test]
    fn open_dialog_shows_inputs_and_disabled_apply() {
        let mut dialog = HistoricalDialog::default();
        dialog.open();
        dialog.set_earnings_input("5000");

        let text = render_dialog(&dialog).unwrap();

        assert!(text.contains("Total Historical Earnings     5000"));
        assert!(text.contains("(enter both values)"));
    }

    #[test]
    fn open_dialog_shows_error() {
        let mut dialog = HistoricalDialog::default();
        dialog.open();
        dialog.set_earnings_input("5000");
        dialog.set_onboarded_input("0");
        dialog.fail(HistoricalOverrideError::InvalidOnboarded);

        let text = render_dialog(&dialog).unwrap();

        assert!(text.contains("! Total onboarded must be greater than zero."));
        assert!(!text.contains("(enter both values)"));
    }
}
