//! Reset command implementation.
//!
//! The `malla reset` command clears all progress after confirmation.

use crate::cli::args::ResetArgs;
use crate::error::{MallaError, Result};
use crate::ui::{Prompt, UserInterface};

use super::context::{no_curriculum, ProjectContext};
use super::dispatcher::{Command, CommandResult};

/// The reset command implementation.
pub struct ResetCommand {
    context: ProjectContext,
    args: ResetArgs,
}

impl ResetCommand {
    /// Create a new reset command.
    pub fn new(context: ProjectContext, args: ResetArgs) -> Self {
        Self { context, args }
    }
}

impl Command for ResetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut tracker = match self.context.open_tracker() {
            Ok(t) => t,
            Err(MallaError::ConfigNotFound { .. }) => return Ok(no_curriculum(ui)),
            Err(e) => return Err(e),
        };

        if !self.args.yes {
            let prompt = Prompt::confirm(
                "reset",
                format!(
                    "Clear all progress ({} passed courses)?",
                    tracker.completed().len()
                ),
                false,
            );
            if !ui.confirm(&prompt)? {
                ui.message("Reset cancelled");
                if !ui.is_interactive() {
                    ui.show_hint("Pass --yes to reset without a prompt");
                }
                return Ok(CommandResult::success());
            }
        }

        let cleared = tracker.reset()?;
        ui.success(&format!("Progress reset ({} courses cleared)", cleared));

        Ok(CommandResult::success())
    }
}
