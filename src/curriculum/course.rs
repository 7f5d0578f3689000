//! Course and semester definitions.

use crate::config::{CourseConfig, SemesterConfig};

/// A single node of the curriculum map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Credit value.
    pub credits: u32,
    /// Direct prerequisites in declared order.
    pub prerequisites: Vec<String>,
    /// Name of the semester this course is listed under.
    pub semester: String,
}

impl Course {
    /// Create a course with no prerequisites.
    pub fn new(id: impl Into<String>, semester: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            credits: 0,
            prerequisites: Vec::new(),
            semester: semester.into(),
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the credit value.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    /// Set the prerequisites.
    pub fn with_prerequisites<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites = prerequisites.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the course can be taken without passing anything first.
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }

    pub(crate) fn from_config(config: &CourseConfig, semester: &str) -> Self {
        Self {
            id: config.id.clone(),
            name: config.name.clone().unwrap_or_else(|| config.id.clone()),
            credits: config.credits,
            prerequisites: config.prerequisites.clone(),
            semester: semester.to_string(),
        }
    }
}

/// A display grouping of courses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Semester {
    /// Semester label.
    pub name: String,
    /// Ids of the courses in this semester, in declared order.
    pub course_ids: Vec<String>,
}

impl Semester {
    pub(crate) fn from_config(config: &SemesterConfig) -> Self {
        Self {
            name: config.name.clone(),
            course_ids: config.courses.iter().map(|c| c.id.clone()).collect(),
        }
    }
}
