//! Non-interactive UI for pipes, CI, and headless environments.

use std::collections::HashMap;

use crate::error::{MallaError, Result};
use crate::progress::ProgressTier;

use super::{parse_answer, progress_bar, OutputMode, Prompt, UserInterface};

/// Prefix of environment variables that answer prompts, e.g. `MALLA_PROMPT_RESET=yes`.
pub const PROMPT_ENV_PREFIX: &str = "MALLA_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Output is plain text with no styling. Prompts are answered from
/// `MALLA_PROMPT_<KEY>` environment variables, falling back to the prompt's
/// default.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn output(&mut self, text: &str) {
        println!("{}", text);
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        match self.env_overrides.get(&env_key) {
            Some(value) => parse_answer(value).ok_or_else(|| MallaError::ConfigValidationError {
                message: format!("{} must be yes or no, got '{}'", env_key, value),
            }),
            None => {
                tracing::debug!(
                    "Answering '{}' with default ({}) in non-interactive mode",
                    prompt.key,
                    prompt.default
                );
                Ok(prompt.default)
            }
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            println!("  {}", hint);
        }
    }

    fn show_progress(&mut self, label: &str, percent: u32, _tier: ProgressTier) {
        if self.mode.shows_status() {
            println!("{} {} {}%", label, progress_bar(percent), percent);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
