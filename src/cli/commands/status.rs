//! Status command implementation.
//!
//! The `malla status` command shows every course grouped by semester.

use std::collections::HashSet;

use crate::cli::args::StatusArgs;
use crate::error::{MallaError, Result};
use crate::gate::CourseStatus;
use crate::progress::CourseReport;
use crate::ui::UserInterface;

use super::context::{no_curriculum, ProjectContext};
use super::dispatcher::{Command, CommandResult};
use super::display;

/// The status command implementation.
pub struct StatusCommand {
    context: ProjectContext,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(context: ProjectContext, args: StatusArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &StatusArgs {
        &self.args
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let tracker = match self.context.open_tracker() {
            Ok(t) => t,
            Err(MallaError::ConfigNotFound { .. }) => return Ok(no_curriculum(ui)),
            Err(e) => return Err(e),
        };
        let curriculum = tracker.curriculum();

        let semester = match &self.args.semester {
            Some(name) => match curriculum.semester(name) {
                Some(semester) => Some(semester.name.as_str()),
                None => {
                    ui.error(&format!("Unknown semester: {}", name));
                    return Ok(CommandResult::failure(1));
                }
            },
            None => None,
        };

        let reports: Vec<CourseReport> = tracker
            .reports()
            .into_iter()
            .filter(|r| semester.is_none_or(|name| r.semester == name))
            .collect();

        if self.args.json {
            let json = serde_json::to_string_pretty(&reports).map_err(anyhow::Error::from)?;
            ui.output(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header(curriculum.name().unwrap_or("Curriculum"));

        let mut seen = HashSet::new();
        for semester in curriculum.semesters() {
            let courses: Vec<&CourseReport> = reports
                .iter()
                .filter(|r| r.semester == semester.name)
                .collect();
            if courses.is_empty() {
                continue;
            }

            ui.message(&semester.name);
            for report in courses {
                seen.insert(report.status);
                display::show_course(ui, report, curriculum);
            }
            ui.message("");
        }

        if let Some(legend) = display::format_legend(&seen, ui.is_interactive()) {
            ui.message(&legend);
        }

        let stats = tracker.statistics();
        ui.message(&format!(
            "Completed courses: {}/{} ({}%)",
            stats.completed_count, stats.total_courses, stats.completion_percent
        ));
        ui.show_progress("Progress", stats.completion_percent, stats.tier);

        if seen.contains(&CourseStatus::Locked) {
            ui.show_hint("Run 'malla missing <ID>' to see what a locked course needs");
        }

        Ok(CommandResult::success())
    }
}
