//! Visual theme and styling.

use console::Style;

/// Styles for diagnostics written to stderr.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
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
            warning: Style::new().for_stderr().color256(208),
            error: Style::new().for_stderr().red().bold(),
            dim: Style::new().for_stderr().dim(),
        }
    }

    /// Create a theme that applies no styling.
    pub fn plain() -> Self {
        Self {
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
        }
    }

    /// Format a warning message.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{} {}", self.warning.apply_to("⚠"), msg)
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{} {}", self.error.apply_to("✗"), self.error.apply_to(msg))
    }

    /// Format a detail line.
    pub fn format_detail(&self, msg: &str) -> String {
        self.dim.apply_to(msg).to_string()
    }
}

/// Check if colors should be enabled for stderr diagnostics.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stderr().is_term()
}
