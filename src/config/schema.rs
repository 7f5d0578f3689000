//! Curriculum file schema definitions.
//!
//! This module contains the struct definitions that map to the YAML
//! curriculum file format (`.malla/curriculum.yml`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root structure of a curriculum file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct CurriculumConfig {
    /// Program name (for display purposes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Tracker settings
    pub settings: Settings,

    /// Semesters in display order
    pub semesters: Vec<SemesterConfig>,
}

/// Tracker settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Progress file path (relative to project root)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_file: Option<PathBuf>,
}

/// A semester grouping of courses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SemesterConfig {
    /// Semester label, e.g. "Semestre 1"
    pub name: String,

    /// Courses in display order
    #[serde(default)]
    pub courses: Vec<CourseConfig>,
}

/// A single course definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CourseConfig {
    /// Unique course identifier
    pub id: String,

    /// Display name (defaults to the id)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Credit value
    #[serde(default)]
    pub credits: u32,

    /// Ids of courses that must be passed first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prerequisites: Vec<String>,
}

impl CurriculumConfig {
    /// Iterate over every course in declaration order.
    pub fn courses(&self) -> impl Iterator<Item = &CourseConfig> {
        self.semesters.iter().flat_map(|s| s.courses.iter())
    }
}

/// JSON Schema (draft 2020-12) for the curriculum file.
pub fn curriculum_schema() -> serde_json::Value {
    schemars::schema_for!(CurriculumConfig).to_value()
}
