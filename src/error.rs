//! Error types for malla operations.
//!
//! This module defines [`MallaError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `MallaError` for domain errors that need distinct handling
//! - A blocked toggle is recoverable: commands turn it into a warning
//! - Use `anyhow::Error` (via `MallaError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::gate::Blocked;

/// Core error type for malla operations.
#[derive(Debug, Error)]
pub enum MallaError {
    /// Curriculum file not found at expected location.
    #[error("Curriculum not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the curriculum file.
    #[error("Failed to parse curriculum at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid curriculum structure or values.
    #[error("Invalid curriculum: {message}")]
    ConfigValidationError { message: String },

    /// A course id that the curriculum does not define.
    #[error("Unknown course: {id}")]
    UnknownCourse { id: String },

    /// Toggle rejected because the course is locked.
    #[error(transparent)]
    Blocked(#[from] Blocked),

    /// Import payload could not be understood.
    #[error("Failed to import progress: {message}")]
    ImportParseError { message: String },

    /// Progress file could not be serialized.
    #[error("Failed to write progress to {path}: {message}")]
    StateError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for malla operations.
pub type Result<T> = std::result::Result<T, MallaError>;
