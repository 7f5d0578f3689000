//! Stats command implementation.
//!
//! The `malla stats` command shows overall and per-semester progress.

use crate::cli::args::StatsArgs;
use crate::error::{MallaError, Result};
use crate::ui::{Align, Table, UserInterface};

use super::context::{no_curriculum, ProjectContext};
use super::dispatcher::{Command, CommandResult};

/// The stats command implementation.
pub struct StatsCommand {
    context: ProjectContext,
    args: StatsArgs,
}

impl StatsCommand {
    /// Create a new stats command.
    pub fn new(context: ProjectContext, args: StatsArgs) -> Self {
        Self { context, args }
    }
}

impl Command for StatsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let tracker = match self.context.open_tracker() {
            Ok(t) => t,
            Err(MallaError::ConfigNotFound { .. }) => return Ok(no_curriculum(ui)),
            Err(e) => return Err(e),
        };

        let stats = tracker.statistics();

        if self.args.json {
            let json = serde_json::to_string_pretty(&stats).map_err(anyhow::Error::from)?;
            ui.output(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header(tracker.curriculum().name().unwrap_or("Curriculum"));

        let mut table = Table::new(vec!["Semester", "Passed", "Progress"])
            .align(1, Align::Right)
            .align(2, Align::Right);
        for semester in &stats.semesters {
            table.add_row(&[
                semester.name.clone(),
                format!("{}/{}", semester.completed, semester.total),
                format!("{}%", semester.percent),
            ]);
        }
        ui.message(&table.render());
        ui.message("");

        ui.message(&format!(
            "Completed courses: {}/{} ({}%)",
            stats.completed_count, stats.total_courses, stats.completion_percent
        ));
        ui.message(&format!(
            "Credits: {}/{}",
            stats.completed_credits, stats.total_credits
        ));
        ui.show_progress("Progress", stats.completion_percent, stats.tier);

        Ok(CommandResult::success())
    }
}
