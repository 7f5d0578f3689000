//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for pipes, CI, and tests
//! - [`MockUI`] capturing every interaction for assertions
//! - Tables and the progress bar used by listing commands
//!
//! # Example
//!
//! ```
//! use malla::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Ingeniería Civil");
//! ui.success("Cálculo I passed!");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::{progress_bar, OutputMode};
pub use prompts::prompt_confirm;
pub use table::{Align, Table};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, MallaTheme};

use crate::error::Result;
use crate::progress::ProgressTier;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display an informational line.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Write data output (JSON, schemas, completion scripts).
    ///
    /// Printed in every output mode.
    fn output(&mut self, text: &str);

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &Prompt) -> Result<bool>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a dimmed hint line.
    fn show_hint(&mut self, hint: &str);

    /// Show a labelled progress bar coloured by tier.
    fn show_progress(&mut self, label: &str, percent: u32, tier: ProgressTier);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// A yes/no question to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for environment overrides and mocks).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// Answer used when the user just presses enter.
    pub default: bool,
}

impl Prompt {
    /// Create a confirmation prompt.
    pub fn confirm(key: impl Into<String>, question: impl Into<String>, default: bool) -> Self {
        Self {
            key: key.into(),
            question: question.into(),
            default,
        }
    }
}

/// Interpret a textual yes/no answer.
pub(crate) fn parse_answer(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Some(true),
        "n" | "no" | "false" | "0" => Some(false),
        _ => None,
    }
}
