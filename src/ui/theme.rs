//! Visual theme and styling.

use console::Style;

/// Styles for the check report.
#[derive(Debug, Clone)]
pub struct CheckTheme {
    /// Style for `ok` (green).
    pub ok: Style,
    /// Style for `FAILED` (red bold).
    pub failed: Style,
    /// Style for the `error` prefix of failure details (red).
    pub error: Style,
    /// Style for `SKIPPED` remarks (yellow).
    pub skipped: Style,
    /// Style for tool versions (dim).
    pub version: Style,
}

impl Default for CheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            ok: Style::new().green(),
            failed: Style::new().red().bold(),
            error: Style::new().red(),
            skipped: Style::new().yellow(),
            version: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            ok: Style::new(),
            failed: Style::new(),
            error: Style::new(),
            skipped: Style::new(),
            version: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_colors(colors: bool) -> Self {
        if colors {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// `ok`
    pub fn format_ok(&self) -> String {
        self.ok.apply_to("ok").to_string()
    }

    /// `FAILED`
    pub fn format_failed(&self) -> String {
        self.failed.apply_to("FAILED").to_string()
    }

    /// `SKIPPED (<reason>)`
    pub fn format_skipped(&self, reason: &str) -> String {
        self.skipped
            .apply_to(format!("SKIPPED ({})", reason))
            .to_string()
    }

    /// `error: <detail>`
    pub fn format_error(&self, detail: &str) -> String {
        format!("{}: {}", self.error.apply_to("error"), detail)
    }

    /// `(<version>)`
    pub fn format_version(&self, version: &str) -> String {
        self.version.apply_to(format!("({})", version)).to_string()
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_has_no_escapes() {
        let theme = CheckTheme::plain();
        assert_eq!(theme.format_ok(), "ok");
        assert_eq!(theme.format_failed(), "FAILED");
        assert_eq!(
            theme.format_skipped("via command flag"),
            "SKIPPED (via command flag)"
        );
        assert_eq!(theme.format_error("bad"), "error: bad");
        assert_eq!(theme.format_version("1.2.3"), "(1.2.3)");
    }

    #[test]
    fn colored_theme_keeps_text() {
        let theme = CheckTheme::new();
        assert!(console::strip_ansi_codes(&theme.format_failed()).contains("FAILED"));
    }

    #[test]
    fn for_colors_selects_theme() {
        let plain = CheckTheme::for_colors(false);
        assert_eq!(plain.format_ok(), "ok");
    }
}
