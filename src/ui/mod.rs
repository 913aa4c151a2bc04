//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait so commands can be tested without a terminal
//! - [`ConsoleUI`] writing results to stdout and diagnostics to stderr
//! - [`MockUI`] capturing everything for assertions
//!
//! # Example
//!
//! ```
//! use imagetag::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("5.3.0");
//! assert_eq!(ui.messages(), ["5.3.0".to_string()]);
//! ```

pub mod console;
pub mod mock;
pub mod output;
pub mod theme;

pub use self::console::ConsoleUI;
pub use mock::MockUI;
pub use output::OutputMode;
pub use theme::{should_use_colors, Theme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Print a result line. Always shown.
    fn message(&mut self, msg: &str);

    /// Show a provenance/detail line (verbose only).
    fn detail(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Always shown.
    fn error(&mut self, msg: &str);
}
