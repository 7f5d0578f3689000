//! Progress summaries derived from the completed set.

pub mod report;
pub mod stats;

pub use report::{available_courses, course_reports, CourseReport};
pub use stats::{completion_percent, ProgressTier, SemesterProgress, Statistics};
