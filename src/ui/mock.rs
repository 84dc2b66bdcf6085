//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use devdoctor::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Checking toolchain");
//! ui.success("Done!");
//!
//! assert!(ui.messages().contains(&"Checking toolchain".to_string()));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use super::{OutputMode, UserInterface};

/// A captured UI call, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Message(String),
    Output(String),
    Success(String),
    Warning(String),
    Error(String),
    Hint(String),
    Header(String),
}

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    events: Vec<UiEvent>,
    messages: Vec<String>,
    outputs: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    hints: Vec<String>,
    headers: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Every captured call, in order.
    pub fn events(&self) -> &[UiEvent] {
        &self.events
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured machine-readable output.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.events.push(UiEvent::Message(msg.to_string()));
        self.messages.push(msg.to_string());
    }

    fn output(&mut self, text: &str) {
        self.events.push(UiEvent::Output(text.to_string()));
        self.outputs.push(text.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.events.push(UiEvent::Success(msg.to_string()));
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.events.push(UiEvent::Warning(msg.to_string()));
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.events.push(UiEvent::Error(msg.to_string()));
        self.errors.push(msg.to_string());
    }

    fn hint(&mut self, msg: &str) {
        self.events.push(UiEvent::Hint(msg.to_string()));
        self.hints.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.events.push(UiEvent::Header(title.to_string()));
        self.headers.push(title.to_string());
    }
}
