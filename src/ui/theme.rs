//! Visual theme and styling.

use console::Style;

/// Terminal styles for the human-readable report.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success indicators (green).
    pub success: Style,
    /// Style for warning indicators (orange).
    pub warning: Style,
    /// Style for error indicators (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for section headers (magenta bold).
    pub header: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
    /// Style for values in key-value displays (normal).
    pub value: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
            key: Style::new().bold(),
            value: Style::new(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            key: Style::new(),
            value: Style::new(),
        }
    }

    /// Pick the colored or plain theme based on the output environment.
    pub fn for_stdout() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
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
    fn plain_theme_creates_without_panic() {
        let theme = Theme::plain();
        let _ = theme.success.apply_to("ok");
    }

    #[test]
    fn default_theme_matches_new() {
        let default = Theme::default();
        let new = Theme::new();
        assert_eq!(
            default.success.apply_to("x").to_string(),
            new.success.apply_to("x").to_string()
        );
    }

    #[test]
    fn theme_slots_exist() {
        let theme = Theme::new();
        let _ = theme.warning.apply_to("⚠");
        let _ = theme.error.apply_to("✗");
        let _ = theme.dim.apply_to("detail");
        let _ = theme.highlight.apply_to("IMPORTANT");
        let _ = theme.header.apply_to("SUMMARY");
        let _ = theme.key.apply_to("Version:");
        let _ = theme.value.apply_to("1.0.0");
    }
}
