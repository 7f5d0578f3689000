//! Init command implementation.
//!
//! The `malla init` command writes a starter curriculum file.

use std::fs;

use crate::cli::args::InitArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::ProjectContext;
use super::dispatcher::{Command, CommandResult};

/// The init command implementation.
pub struct InitCommand {
    context: ProjectContext,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(context: ProjectContext, args: InitArgs) -> Self {
        Self { context, args }
    }

    /// Starter curriculum named after the project directory.
    fn starter_curriculum(&self) -> String {
        let program = self
            .context
            .root()
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("My Program");

        format!(
            "# Malla curriculum for {program}\n\
             #\n\
             # Each course needs a unique id. Prerequisites list the ids of\n\
             # courses that must be passed first.\n\
             #\n\
             # Store progress somewhere else:\n\
             #   settings:\n\
             #     progress_file: progress.json\n\
             \n\
             name: \"{program}\"\n\
             \n\
             semesters:\n\
             \x20 - name: Semestre 1\n\
             \x20   courses:\n\
             \x20     - id: mat1\n\
             \x20       name: Cálculo I\n\
             \x20       credits: 6\n\
             \x20     - id: fis1\n\
             \x20       name: Física I\n\
             \x20       credits: 5\n\
             \n\
             \x20 - name: Semestre 2\n\
             \x20   courses:\n\
             \x20     - id: mat2\n\
             \x20       name: Cálculo II\n\
             \x20       credits: 6\n\
             \x20       prerequisites: [mat1]\n\
             \x20     - id: fis2\n\
             \x20       name: Física II\n\
             \x20       credits: 5\n\
             \x20       prerequisites: [mat1, fis1]\n"
        )
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path = self.context.curriculum_path();

        if path.exists() && !self.args.force {
            ui.error(&format!(
                "Curriculum already exists at {}. Use --force to overwrite.",
                path.display()
            ));
            return Ok(CommandResult::failure(1));
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&path, self.starter_curriculum())?;
        tracing::info!("Wrote starter curriculum to {}", path.display());

        ui.success(&format!("Created {}", path.display()));
        ui.show_hint("Edit the file to match your program, then run 'malla status'");

        Ok(CommandResult::success())
    }
}
