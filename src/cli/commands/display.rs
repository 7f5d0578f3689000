//! Shared display helpers for course status formatting.
//!
//! Used by `status`, `available`, `toggle`, and `missing` so course lines
//! read the same everywhere.

use std::collections::HashSet;

use crate::curriculum::Curriculum;
use crate::gate::CourseStatus;
use crate::progress::CourseReport;
use crate::ui::UserInterface;

/// Icon on a terminal, bracketed symbol otherwise.
pub fn status_symbol(status: CourseStatus, interactive: bool) -> &'static str {
    if interactive {
        status.icon()
    } else {
        status.bracketed()
    }
}

/// Display names for a list of ids, joined with commas.
pub fn display_names(curriculum: &Curriculum, ids: &[String]) -> String {
    ids.iter()
        .map(|id| curriculum.display_name(id))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One course line: symbol, name, optional details, missing prerequisites.
pub fn course_line(
    report: &CourseReport,
    curriculum: &Curriculum,
    interactive: bool,
    details: bool,
) -> String {
    let mut line = format!(
        "  {} {}",
        status_symbol(report.status, interactive),
        report.name
    );
    if details {
        line.push_str(&format!(" ({}, {} credits)", report.id, report.credits));
    }
    if !report.missing.is_empty() {
        line.push_str(&format!(
            "  missing prerequisites: {}",
            display_names(curriculum, &report.missing)
        ));
    }
    line
}

/// Print a course line.
pub fn show_course(ui: &mut dyn UserInterface, report: &CourseReport, curriculum: &Curriculum) {
    let line = course_line(
        report,
        curriculum,
        ui.is_interactive(),
        ui.output_mode().shows_details(),
    );
    ui.message(&line);
}

/// Legend for the statuses that were shown, or `None` if nothing was shown.
pub fn format_legend(seen: &HashSet<CourseStatus>, interactive: bool) -> Option<String> {
    if seen.is_empty() {
        return None;
    }

    let entries: Vec<String> = [
        CourseStatus::Completed,
        CourseStatus::Available,
        CourseStatus::Locked,
    ]
    .into_iter()
    .filter(|s| seen.contains(s))
    .map(|s| format!("{} {}", status_symbol(s, interactive), s.describe()))
    .collect();

    Some(format!("Legend: {}", entries.join("  ")))
}
