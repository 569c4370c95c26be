//! Status line listing the commands available in the current view.

/// Command hint for the status bar.
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(
        key: &'static str,
        action: &'static str,
    ) -> Self {
        Self { key, action }
    }
}

/// Build a status line from a list of hints.
pub fn build_status_bar(hints: &[KeyHint]) -> String {
    hints
        .iter()
        .map(|h| format!("{}: {}", h.key, h.action))
        .collect::<Vec<_>>()
        .join(" │ ")
}

/// Common hints.
pub mod hints {
    use super::KeyHint;

    pub const PENDING: KeyHint = KeyHint::new("pending <n>", "Conversions");
    pub const RATE: KeyHint = KeyHint::new("rate <%>", "Commission");
    pub const AVG: KeyHint = KeyHint::new("avg <amt>", "Avg investment");
    pub const CALC: KeyHint = KeyHint::new("calc", "Let's Calculate");
    pub const LINK: KeyHint = KeyHint::new("link", "Convert now");
    pub const QUIT: KeyHint = KeyHint::new("quit", "Exit");

    pub const EARNINGS: KeyHint = KeyHint::new("earnings <amt>", "Total earnings");
    pub const ONBOARDED: KeyHint = KeyHint::new("onboarded <n>", "Total onboarded");
    pub const APPLY: KeyHint = KeyHint::new("apply", "Apply");
    pub const CANCEL: KeyHint = KeyHint::new("cancel", "Close");
}
