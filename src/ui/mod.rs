//! Terminal presentation of doctor results.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] for capturing output in tests
//! - [`report`] for rendering a warning list as text or JSON
//!
//! # Example
//!
//! ```
//! use devdoctor::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.warning("Xcode is not installed or is not configured properly.");
//! assert_eq!(ui.warnings().len(), 1);
//! ```

pub mod mock;
pub mod output;
pub mod report;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use report::{render_json, render_report, Report};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, DoctorTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Write machine-readable output. Shown in every output mode.
    fn output(&mut self, text: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every output mode.
    fn error(&mut self, msg: &str);

    /// Display a contextual hint or tip.
    fn hint(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);
}
