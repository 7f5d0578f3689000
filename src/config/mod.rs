//! Curriculum configuration: schema, discovery, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use malla::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".malla");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(
//!     dir.join("curriculum.yml"),
//!     "semesters:\n  - name: S1\n    courses: [{ id: mat1 }]\n",
//! )
//! .unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.semesters[0].courses[0].id, "mat1");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    default_config_path, find_project_root, load_config, load_config_file, parse_config,
    resolve_progress_path, CURRICULUM_FILE, MALLA_DIR, PROGRESS_FILE,
};
pub use schema::{curriculum_schema, CourseConfig, CurriculumConfig, SemesterConfig, Settings};
pub use validator::{validate, validate_config, ValidationError};
