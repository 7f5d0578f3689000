//! Check command implementation.
//!
//! The `malla check` command validates the curriculum file and reports
//! every problem it finds.

use crate::config::validate_config;
use crate::error::{MallaError, Result};
use crate::ui::UserInterface;

use super::context::{no_curriculum, ProjectContext};
use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    context: ProjectContext,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(context: ProjectContext) -> Self {
        Self { context }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match self.context.load_config() {
            Ok(c) => c,
            Err(MallaError::ConfigNotFound { .. }) => return Ok(no_curriculum(ui)),
            Err(MallaError::ConfigParseError { path, message }) => {
                ui.error(&format!("Parse error in {}: {}", path.display(), message));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let errors = validate_config(&config);
        if errors.is_empty() {
            ui.success(&format!(
                "Curriculum is valid ({} courses in {} semesters)",
                config.courses().count(),
                config.semesters.len()
            ));
            return Ok(CommandResult::success());
        }

        for error in &errors {
            ui.error(&format!("[{}] {}", error.rule, error.message));
        }
        ui.message(&format!("{} problem(s) found", errors.len()));

        Ok(CommandResult::failure(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::context::testing::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn run(temp: &TempDir) -> (CommandResult, MockUI) {
        let mut ui = MockUI::new();
        let result = CheckCommand::new(context(temp)).execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn valid_curriculum_passes() {
        let temp = setup_project(CURRICULUM);

        let (result, ui) = run(&temp);

        assert!(result.success);
        assert!(ui.has_success("Curriculum is valid (4 courses in 2 semesters)"));
    }

    #[test]
    fn reports_every_problem() {
        let temp = setup_project(
            r#"
semesters:
  - name: S1
    courses:
      - id: a
        prerequisites: [ghost]
      - id: a
      - id: b
        prerequisites: [b]
"#,
        );

        let (result, ui) = run(&temp);

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("[duplicate-id]"));
        assert!(ui.has_error("[unknown-prerequisite]"));
        assert!(ui.has_error("[self-prerequisite]"));
        assert!(ui.has_message("3 problem(s) found"));
    }

    #[test]
    fn reports_cycles() {
        let temp = setup_project(
            r#"
semesters:
  - name: S1
    courses:
      - id: a
        prerequisites: [b]
      - id: b
        prerequisites: [a]
"#,
        );

        let (result, ui) = run(&temp);

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("[circular-prerequisite]"));
    }

    #[test]
    fn parse_error_is_reported() {
        let temp = setup_project("semesters: [");

        let (result, ui) = run(&temp);

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Parse error"));
    }

    #[test]
    fn missing_curriculum() {
        let temp = TempDir::new().unwrap();
        let (result, _) = run(&temp);
        assert_eq!(result.exit_code, 2);
    }
}
