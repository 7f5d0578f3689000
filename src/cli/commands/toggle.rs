//! Toggle command implementation.
//!
//! The `malla toggle` command marks courses as passed or not passed.

use crate::cli::args::ToggleArgs;
use crate::error::{MallaError, Result};
use crate::ui::UserInterface;

use super::context::{no_curriculum, ProjectContext};
use super::dispatcher::{Command, CommandResult};
use super::display;

/// The toggle command implementation.
pub struct ToggleCommand {
    context: ProjectContext,
    args: ToggleArgs,
}

impl ToggleCommand {
    /// Create a new toggle command.
    pub fn new(context: ProjectContext, args: ToggleArgs) -> Self {
        Self { context, args }
    }
}

impl Command for ToggleCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut tracker = match self.context.open_tracker() {
            Ok(t) => t,
            Err(MallaError::ConfigNotFound { .. }) => return Ok(no_curriculum(ui)),
            Err(e) => return Err(e),
        };

        // Later ids still apply when an earlier one is rejected.
        let mut rejected = 0;
        for id in &self.args.courses {
            match tracker.toggle(id) {
                Ok(outcome) if outcome.completed => ui.success(&outcome.notice()),
                Ok(outcome) => ui.message(&outcome.notice()),
                Err(MallaError::Blocked(blocked)) => {
                    rejected += 1;
                    let curriculum = tracker.curriculum();
                    ui.warning(&format!(
                        "Cannot pass {}: missing prerequisites: {}",
                        curriculum.display_name(&blocked.course),
                        display::display_names(curriculum, &blocked.missing)
                    ));
                }
                Err(MallaError::UnknownCourse { id }) => {
                    rejected += 1;
                    ui.error(&format!("Unknown course: {}", id));
                }
                Err(e) => return Err(e),
            }
        }

        if rejected > 0 {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::context::testing::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn run(temp: &TempDir, ids: &[&str]) -> (CommandResult, MockUI) {
        let args = ToggleArgs {
            courses: ids.iter().map(|s| s.to_string()).collect(),
        };
        let cmd = ToggleCommand::new(context(temp), args);
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn toggle_passes_and_persists() {
        let temp = setup_project(CURRICULUM);

        let (result, ui) = run(&temp, &["mat1"]);

        assert!(result.success);
        assert!(ui.has_success("Cálculo I passed!"));
        assert_eq!(read_progress(&temp).as_deref(), Some(r#"["mat1"]"#));
    }

    #[test]
    fn toggle_twice_unpasses() {
        let temp = setup_project(CURRICULUM);
        write_progress(&temp, r#"["mat1"]"#);

        let (result, ui) = run(&temp, &["mat1"]);

        assert!(result.success);
        assert!(ui.has_message("Cálculo I marked as not passed"));
        assert_eq!(read_progress(&temp).as_deref(), Some("[]"));
    }

    #[test]
    fn blocked_toggle_warns_and_fails() {
        let temp = setup_project(CURRICULUM);

        let (result, ui) = run(&temp, &["fis2"]);

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_warning("Cannot pass Física II: missing prerequisites: Cálculo I, Física I"));
        assert!(read_progress(&temp).is_none());
    }

    #[test]
    fn toggles_apply_in_order() {
        let temp = setup_project(CURRICULUM);

        let (result, ui) = run(&temp, &["mat2", "mat1", "mat2"]);

        // First mat2 is blocked, then mat1 unlocks the second one.
        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.warnings().len(), 1);
        assert!(ui.has_success("Cálculo II passed!"));
        assert_eq!(read_progress(&temp).as_deref(), Some(r#"["mat1","mat2"]"#));
    }

    #[test]
    fn unknown_course_is_reported() {
        let temp = setup_project(CURRICULUM);

        let (result, ui) = run(&temp, &["qui1"]);

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Unknown course: qui1"));
    }

    #[test]
    fn completed_course_with_unmet_prerequisites_can_be_unpassed() {
        let temp = setup_project(CURRICULUM);
        write_progress(&temp, r#"["mat2"]"#);

        let (result, _) = run(&temp, &["mat2"]);

        assert!(result.success);
        assert_eq!(read_progress(&temp).as_deref(), Some("[]"));
    }
}
