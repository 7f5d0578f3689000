//! Export command implementation.
//!
//! The `malla export` command writes the completed courses to a JSON
//! document that `malla import` can read back.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::cli::args::ExportArgs;
use crate::error::{MallaError, Result};
use crate::exchange::default_export_file_name;
use crate::ui::UserInterface;

use super::context::{no_curriculum, ProjectContext};
use super::dispatcher::{Command, CommandResult};

/// Output path that means "write to stdout".
const STDOUT_PATH: &str = "-";

/// The export command implementation.
pub struct ExportCommand {
    context: ProjectContext,
    args: ExportArgs,
    date: NaiveDate,
}

impl ExportCommand {
    /// Create a new export command dated today.
    pub fn new(context: ProjectContext, args: ExportArgs) -> Self {
        Self::with_date(context, args, Local::now().date_naive())
    }

    /// Create a new export command for a fixed date.
    pub fn with_date(context: ProjectContext, args: ExportArgs, date: NaiveDate) -> Self {
        Self {
            context,
            args,
            date,
        }
    }

    fn target(&self) -> Option<PathBuf> {
        match &self.args.output {
            Some(p) if p.as_os_str() == STDOUT_PATH => None,
            Some(p) => Some(self.context.resolve_user_path(p)),
            None => Some(
                self.context
                    .resolve_user_path(Path::new(&default_export_file_name(self.date))),
            ),
        }
    }
}

impl Command for ExportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let tracker = match self.context.open_tracker() {
            Ok(t) => t,
            Err(MallaError::ConfigNotFound { .. }) => return Ok(no_curriculum(ui)),
            Err(e) => return Err(e),
        };

        let document = tracker.export(self.date);
        let json = document.to_json().map_err(anyhow::Error::from)?;

        match self.target() {
            None => ui.output(&json),
            Some(path) => {
                fs::write(&path, format!("{}\n", json))?;
                tracing::info!("Exported progress to {}", path.display());
                ui.success(&format!(
                    "Exported {} completed courses to {}",
                    document.completed_count,
                    path.display()
                ));
            }
        }

        Ok(CommandResult::success())
    }
}
