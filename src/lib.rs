//! Malla - Curriculum map tracker with prerequisite gating.
//!
//! Malla reads a curriculum (semesters of courses with prerequisites) from
//! `.malla/curriculum.yml`, remembers which courses you passed, and tells you
//! which courses are locked, which are available, and how far along you are.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Curriculum file loading, parsing, and validation
//! - [`curriculum`] - The static course catalogue
//! - [`error`] - Error types and result aliases
//! - [`exchange`] - Export and import documents
//! - [`gate`] - Prerequisite gating over the completed set
//! - [`progress`] - Statistics and per-course reports
//! - [`state`] - Progress persistence
//! - [`tracker`] - The controller owning the completed set
//! - [`ui`] - Terminal output and prompts
//!
//! # Example
//!
//! ```
//! use malla::curriculum::{Course, Curriculum};
//! use malla::gate::{CompletedSet, CourseStatus, PrerequisiteGate};
//!
//! let curriculum = Curriculum::new(vec![
//!     Course::new("mat1", "Semestre 1").with_name("Cálculo I"),
//!     Course::new("mat2", "Semestre 2").with_prerequisites(["mat1"]),
//! ]);
//! let completed: CompletedSet = ["mat1"].into_iter().collect();
//! let gate = PrerequisiteGate::new(&curriculum, &completed);
//!
//! assert_eq!(gate.status("mat1"), CourseStatus::Completed);
//! assert_eq!(gate.status("mat2"), CourseStatus::Available);
//! ```

pub mod cli;
pub mod config;
pub mod curriculum;
pub mod error;
pub mod exchange;
pub mod gate;
pub mod progress;
pub mod state;
pub mod tracker;
pub mod ui;

pub use error::{MallaError, Result};
