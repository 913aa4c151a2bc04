//! Console UI.

use super::theme::{should_use_colors, Theme};
use super::{OutputMode, UserInterface};

/// Writes results to stdout and diagnostics to stderr.
///
/// Stdout carries nothing but results so it can be captured by `$(...)`
/// or `eval`.
pub struct ConsoleUI {
    mode: OutputMode,
    theme: Theme,
}

impl ConsoleUI {
    /// Create a console UI, enabling colors when stderr is a terminal.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };
        Self { mode, theme }
    }
}

impl UserInterface for ConsoleUI {
    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_details() {
            eprintln!("{}", self.theme.format_detail(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_warnings() {
            eprintln!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }
}
