//! Recording UI for command tests.
//!
//! Every call is captured per channel so tests can assert on what a command
//! said and asked. Prompt answers are configured by key.
//!
//! # Example
//!
//! ```
//! use malla::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("reset", true);
//!
//! ui.message("Semestre 1");
//! assert!(ui.confirm(&Prompt::confirm("reset", "Clear?", false)).unwrap());
//!
//! assert!(ui.has_message("Semestre 1"));
//! assert_eq!(ui.prompts_shown(), ["reset"]);
//! ```

use std::collections::HashMap;

use crate::error::Result;
use crate::progress::ProgressTier;

use super::{OutputMode, Prompt, UserInterface};

/// [`UserInterface`] that records instead of printing.
///
/// Captures every interaction and answers prompts from a configured map,
/// falling back to each prompt's default.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    outputs: Vec<String>,
    headers: Vec<String>,
    hints: Vec<String>,
    progress: Vec<(String, u32, ProgressTier)>,
    prompt_responses: HashMap<String, bool>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Normal output mode, non-interactive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recording UI for a given output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set the answer for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: bool) {
        self.prompt_responses.insert(key.to_string(), response);
    }

    /// Make [`UserInterface::is_interactive`] report `interactive`.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Data written through [`UserInterface::output`].
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Progress bars as `(label, percent, tier)`.
    pub fn progress(&self) -> &[(String, u32, ProgressTier)] {
        &self.progress
    }

    /// Keys of the prompts asked so far, in order.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Substring match against captured messages.
    pub fn has_message(&self, needle: &str) -> bool {
        any_contains(&self.messages, needle)
    }

    pub fn has_success(&self, needle: &str) -> bool {
        any_contains(&self.successes, needle)
    }

    pub fn has_warning(&self, needle: &str) -> bool {
        any_contains(&self.warnings, needle)
    }

    pub fn has_error(&self, needle: &str) -> bool {
        any_contains(&self.errors, needle)
    }

    pub fn has_hint(&self, needle: &str) -> bool {
        any_contains(&self.hints, needle)
    }

    /// All data output joined into one string.
    pub fn output_text(&self) -> String {
        self.outputs.join("\n")
    }

    /// Forget everything captured, keeping mode and configured answers.
    pub fn clear(&mut self) {
        *self = Self {
            mode: self.mode,
            interactive: self.interactive,
            prompt_responses: std::mem::take(&mut self.prompt_responses),
            ..Default::default()
        };
    }
}

fn any_contains(captured: &[String], needle: &str) -> bool {
    captured.iter().any(|line| line.contains(needle))
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn output(&mut self, text: &str) {
        self.outputs.push(text.to_string());
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        self.prompts_shown.push(prompt.key.clone());
        Ok(self
            .prompt_responses
            .get(&prompt.key)
            .copied()
            .unwrap_or(prompt.default))
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn show_progress(&mut self, label: &str, percent: u32, tier: ProgressTier) {
        self.progress.push((label.to_string(), percent, tier));
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_channel_separately() {
        let mut ui = MockUI::new();
        ui.message("m");
        ui.success("s");
        ui.warning("w");
        ui.error("e");
        ui.output("{}");
        ui.show_header("h");
        ui.show_hint("tip");

        assert_eq!(ui.messages(), ["m"]);
        assert_eq!(ui.successes(), ["s"]);
        assert_eq!(ui.warnings(), ["w"]);
        assert_eq!(ui.errors(), ["e"]);
        assert_eq!(ui.outputs(), ["{}"]);
        assert_eq!(ui.headers(), ["h"]);
        assert!(ui.has_hint("tip"));
    }

    #[test]
    fn confirm_falls_back_to_prompt_default() {
        let mut ui = MockUI::new();
        assert!(ui.confirm(&Prompt::confirm("a", "?", true)).unwrap());
        assert!(!ui.confirm(&Prompt::confirm("b", "?", false)).unwrap());
        assert_eq!(ui.prompts_shown(), ["a", "b"]);
    }

    #[test]
    fn records_progress() {
        let mut ui = MockUI::new();
        ui.show_progress("Progress", 45, ProgressTier::Medium);
        assert_eq!(
            ui.progress(),
            [("Progress".to_string(), 45, ProgressTier::Medium)]
        );
    }

    #[test]
    fn clear_resets_captures() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        ui.message("x");
        ui.clear();
        assert!(ui.messages().is_empty());
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn interactive_flag_is_configurable() {
        let mut ui = MockUI::new();
        assert!(!ui.is_interactive());
        ui.set_interactive(true);
        assert!(ui.is_interactive());
    }
}
