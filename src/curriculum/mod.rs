//! Static curriculum model.
//!
//! Course definitions are loaded once from configuration and treated as
//! read-only input by the rest of the crate.

pub mod catalog;
pub mod course;

pub use catalog::Curriculum;
pub use course::{Course, Semester};
