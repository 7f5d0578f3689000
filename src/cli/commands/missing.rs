//! Missing command implementation.
//!
//! The `malla missing` command lists the prerequisites a course still needs.

use crate::cli::args::MissingArgs;
use crate::error::{MallaError, Result};
use crate::ui::UserInterface;

use super::context::{no_curriculum, ProjectContext};
use super::dispatcher::{Command, CommandResult};

/// The missing command implementation.
pub struct MissingCommand {
    context: ProjectContext,
    args: MissingArgs,
}

impl MissingCommand {
    /// Create a new missing command.
    pub fn new(context: ProjectContext, args: MissingArgs) -> Self {
        Self { context, args }
    }
}

impl Command for MissingCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let tracker = match self.context.open_tracker() {
            Ok(t) => t,
            Err(MallaError::ConfigNotFound { .. }) => return Ok(no_curriculum(ui)),
            Err(e) => return Err(e),
        };

        let id = self.args.course.as_str();
        let name = match tracker.require_course(id) {
            Ok(course) => course.name.clone(),
            Err(MallaError::UnknownCourse { id }) => {
                ui.error(&format!("Unknown course: {}", id));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        if tracker.is_completed(id) {
            ui.success(&format!("{} is already passed", name));
            return Ok(CommandResult::success());
        }

        let missing = tracker.missing_prerequisites(id);
        if missing.is_empty() {
            ui.success(&format!("{} can be taken now", name));
            return Ok(CommandResult::success());
        }

        ui.message(&format!("{} is missing:", name));
        let curriculum = tracker.curriculum();
        for prereq in &missing {
            if ui.output_mode().shows_details() {
                ui.message(&format!(
                    "  - {} ({})",
                    curriculum.display_name(prereq),
                    prereq
                ));
            } else {
                ui.message(&format!("  - {}", curriculum.display_name(prereq)));
            }
        }

        Ok(CommandResult::success())
    }
}
