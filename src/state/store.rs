//! Persistent progress storage.
//!
//! A single file holds the completed set as a JSON array of course ids.
//! The store subscribes to tracker changes and rewrites the file after every
//! toggle or import, and removes it on reset.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{MallaError, Result};
use crate::gate::CompletedSet;
use crate::tracker::{ChangeKind, StateChange, StateObserver};

/// File-backed store for the completed set.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    /// Create a store writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the progress file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a progress file currently exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the completed set.
    ///
    /// A missing file yields an empty set. A payload that is not a JSON array
    /// of ids (including bytes that are not UTF-8) also yields an empty set;
    /// the problem is logged rather than reported.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file exists but cannot be read.
    pub fn load(&self) -> Result<CompletedSet> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No progress file at {}", self.path.display());
                return Ok(CompletedSet::new());
            }
            Err(e) => return Err(MallaError::Io(e)),
        };

        match serde_json::from_slice::<CompletedSet>(&content) {
            Ok(set) => {
                tracing::debug!(
                    "Loaded {} completed courses from {}",
                    set.len(),
                    self.path.display()
                );
                Ok(set)
            }
            Err(e) => {
                tracing::warn!(
                    "Ignoring unreadable progress file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(CompletedSet::new())
            }
        }
    }

    /// Save the completed set using an atomic write.
    ///
    /// Writes to a temp file then renames it over the target, so a crash
    /// mid-write never leaves a truncated progress file.
    pub fn save(&self, completed: &CompletedSet) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let content =
            serde_json::to_string(completed).map_err(|e| MallaError::StateError {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!(
            "Saved {} completed courses to {}",
            completed.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Remove the progress file if present.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(MallaError::Io(e)),
        }
    }
}

impl StateObserver for ProgressStore {
    fn on_change(&mut self, change: &StateChange<'_>) -> Result<()> {
        match change.kind {
            ChangeKind::Reset => self.clear(),
            ChangeKind::Toggled { .. } | ChangeKind::Imported { .. } => {
                self.save(change.completed)
            }
        }
    }
}
