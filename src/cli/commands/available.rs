//! Available command implementation.
//!
//! The `malla available` command lists courses that can be taken now.

use serde::Serialize;

use crate::cli::args::AvailableArgs;
use crate::curriculum::Course;
use crate::error::{MallaError, Result};
use crate::gate::CourseStatus;
use crate::ui::UserInterface;

use super::context::{no_curriculum, ProjectContext};
use super::dispatcher::{Command, CommandResult};
use super::display::status_symbol;

/// JSON shape of one available course.
#[derive(Debug, Serialize)]
struct AvailableCourse<'a> {
    id: &'a str,
    name: &'a str,
    semester: &'a str,
    credits: u32,
}

impl<'a> From<&'a Course> for AvailableCourse<'a> {
    fn from(course: &'a Course) -> Self {
        Self {
            id: &course.id,
            name: &course.name,
            semester: &course.semester,
            credits: course.credits,
        }
    }
}

/// The available command implementation.
pub struct AvailableCommand {
    context: ProjectContext,
    args: AvailableArgs,
}

impl AvailableCommand {
    /// Create a new available command.
    pub fn new(context: ProjectContext, args: AvailableArgs) -> Self {
        Self { context, args }
    }
}

impl Command for AvailableCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let tracker = match self.context.open_tracker() {
            Ok(t) => t,
            Err(MallaError::ConfigNotFound { .. }) => return Ok(no_curriculum(ui)),
            Err(e) => return Err(e),
        };

        let available = tracker.available_courses();

        if self.args.json {
            let items: Vec<AvailableCourse<'_>> =
                available.iter().map(|c| AvailableCourse::from(*c)).collect();
            let json = serde_json::to_string_pretty(&items).map_err(anyhow::Error::from)?;
            ui.output(&json);
            return Ok(CommandResult::success());
        }

        if available.is_empty() {
            let curriculum = tracker.curriculum();
            if curriculum.courses().iter().all(|c| tracker.is_completed(&c.id)) {
                ui.success("Every course is passed");
            } else {
                ui.message("No courses can be taken right now");
            }
            return Ok(CommandResult::success());
        }

        let symbol = status_symbol(CourseStatus::Available, ui.is_interactive());
        let details = ui.output_mode().shows_details();
        ui.message(&format!("Courses you can take ({}):", available.len()));
        for course in &available {
            let mut line = format!("  {} {}", symbol, course.name);
            if details {
                line.push_str(&format!(" ({}, {} credits)", course.id, course.credits));
            }
            line.push_str(&format!("  [{}]", course.semester));
            ui.message(&line);
        }

        Ok(CommandResult::success())
    }
}
