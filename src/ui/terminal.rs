//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;
use crate::progress::ProgressTier;

use super::{
    progress_bar, prompt_confirm, should_use_colors, MallaTheme, NonInteractiveUI, OutputMode,
    Prompt, UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    err_term: Term,
    theme: MallaTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            MallaTheme::new()
        } else {
            MallaTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err_term: Term::stderr(),
            theme,
            mode,
        }
    }

    /// The theme used for styling.
    pub fn theme(&self) -> &MallaTheme {
        &self.theme
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err_term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err_term, "{}", self.theme.format_error(msg)).ok();
    }

    fn output(&mut self, text: &str) {
        writeln!(self.term, "{}", text).ok();
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        prompt_confirm(prompt, &self.term)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "  {}", self.theme.hint.apply_to(hint)).ok();
        }
    }

    fn show_progress(&mut self, label: &str, percent: u32, tier: ProgressTier) {
        if self.mode.shows_status() {
            writeln!(
                self.term,
                "{} {} {}",
                label,
                self.theme.tier_style(tier).apply_to(progress_bar(percent)),
                self.theme.highlight.apply_to(format!("{}%", percent)),
            )
            .ok();
        }
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_output_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn create_ui_non_interactive() {
        let ui = create_ui(false, OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn create_ui_respects_mode() {
        let ui = create_ui(false, OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
