//! Per-course status listings.

use serde::Serialize;

use crate::curriculum::{Course, Curriculum};
use crate::gate::{CompletedSet, CourseStatus, PrerequisiteGate};

/// One course with its derived status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseReport {
    pub id: String,
    pub name: String,
    pub semester: String,
    pub credits: u32,
    pub status: CourseStatus,
    /// Unmet prerequisites (ids), only for locked courses.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
}

/// Status report for every course, in declared order.
pub fn course_reports(curriculum: &Curriculum, completed: &CompletedSet) -> Vec<CourseReport> {
    let gate = PrerequisiteGate::new(curriculum, completed);

    curriculum
        .courses()
        .iter()
        .map(|course| {
            let status = gate.status(&course.id);
            let missing = if status == CourseStatus::Locked {
                gate.missing_prerequisites(&course.id)
            } else {
                Vec::new()
            };
            CourseReport {
                id: course.id.clone(),
                name: course.name.clone(),
                semester: course.semester.clone(),
                credits: course.credits,
                status,
                missing,
            }
        })
        .collect()
}

/// Courses that can be taken right now.
pub fn available_courses<'a>(
    curriculum: &'a Curriculum,
    completed: &CompletedSet,
) -> Vec<&'a Course> {
    let gate = PrerequisiteGate::new(curriculum, completed);
    curriculum
        .courses()
        .iter()
        .filter(|c| gate.status(&c.id) == CourseStatus::Available)
        .collect()
}
