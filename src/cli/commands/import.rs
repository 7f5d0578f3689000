//! Import command implementation.
//!
//! The `malla import` command replaces progress with the courses listed in
//! an exported document.

use std::fs;
use std::io::ErrorKind;

use crate::cli::args::ImportArgs;
use crate::error::{MallaError, Result};
use crate::ui::UserInterface;

use super::context::{no_curriculum, ProjectContext};
use super::dispatcher::{Command, CommandResult};

/// The import command implementation.
pub struct ImportCommand {
    context: ProjectContext,
    args: ImportArgs,
}

impl ImportCommand {
    /// Create a new import command.
    pub fn new(context: ProjectContext, args: ImportArgs) -> Self {
        Self { context, args }
    }
}

impl Command for ImportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut tracker = match self.context.open_tracker() {
            Ok(t) => t,
            Err(MallaError::ConfigNotFound { .. }) => return Ok(no_curriculum(ui)),
            Err(e) => return Err(e),
        };

        let path = self.context.resolve_user_path(&self.args.file);
        let payload = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                ui.error(&format!("File not found: {}", path.display()));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e.into()),
        };

        let summary = match tracker.import(&payload) {
            Ok(summary) => summary,
            Err(e @ MallaError::ImportParseError { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        if !summary.unknown.is_empty() {
            ui.warning(&format!(
                "{} imported courses are not in the curriculum: {}",
                summary.unknown.len(),
                summary.unknown.join(", ")
            ));
        }
        ui.success(&format!(
            "Imported {} completed courses from {}",
            summary.imported,
            path.display()
        ));

        Ok(CommandResult::success())
    }
}
