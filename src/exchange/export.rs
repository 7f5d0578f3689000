//! Progress export document.

use chrono::NaiveDate;
use serde::Serialize;

use crate::curriculum::Curriculum;
use crate::gate::CompletedSet;
use crate::progress::completion_percent;

/// Snapshot of the completed set, suitable for sharing or re-importing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    /// Export date, `YYYY-MM-DD`.
    pub date: String,
    pub total_courses: usize,
    pub completed_count: usize,
    pub completion_percent: u32,
    pub courses: Vec<ExportedCourse>,
}

/// One completed course in an export.
///
/// Ids unknown to the curriculum keep their raw id as name and carry no
/// credits or semester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedCourse {
    pub id: String,
    pub name: String,
    pub credits: Option<u32>,
    pub semester: Option<String>,
}

impl ExportDocument {
    /// Build an export for the given date.
    pub fn build(curriculum: &Curriculum, completed: &CompletedSet, date: NaiveDate) -> Self {
        let courses: Vec<ExportedCourse> = completed
            .iter()
            .map(|id| match curriculum.course(id) {
                Some(course) => ExportedCourse {
                    id: course.id.clone(),
                    name: course.name.clone(),
                    credits: Some(course.credits),
                    semester: Some(course.semester.clone()),
                },
                None => ExportedCourse {
                    id: id.to_string(),
                    name: id.to_string(),
                    credits: None,
                    semester: None,
                },
            })
            .collect();

        Self {
            date: date.format("%Y-%m-%d").to_string(),
            total_courses: curriculum.len(),
            completed_count: courses.len(),
            completion_percent: completion_percent(courses.len(), curriculum.len()),
            courses,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Default export file name for a date.
pub fn default_export_file_name(date: NaiveDate) -> String {
    format!("malla-progress-{}.json", date.format("%Y-%m-%d"))
}
