//! Project context shared by commands.
//!
//! Resolves the curriculum and progress locations from the global flags and
//! wires a [`Tracker`] to its [`ProgressStore`].

use std::path::{Path, PathBuf};

use crate::config::{default_config_path, load_config, resolve_progress_path, CurriculumConfig};
use crate::curriculum::Curriculum;
use crate::error::Result;
use crate::state::ProgressStore;
use crate::tracker::Tracker;
use crate::ui::UserInterface;

use super::dispatcher::CommandResult;

/// Exit code used when no curriculum file exists.
pub const EXIT_NO_CURRICULUM: i32 = 2;

/// Locations a command operates on.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    root: PathBuf,
    working_dir: PathBuf,
    config: Option<PathBuf>,
    progress: Option<PathBuf>,
}

impl ProjectContext {
    /// Create a context for a project root.
    ///
    /// Relative paths given on the command line resolve against the root
    /// until [`with_working_dir`](Self::with_working_dir) says otherwise.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            working_dir: root.clone(),
            root,
            config: None,
            progress: None,
        }
    }

    /// Directory that user-supplied relative paths resolve against.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = dir.into();
        self
    }

    /// Explicit curriculum file (`--config`).
    pub fn with_config(mut self, config: Option<PathBuf>) -> Self {
        self.config = config;
        self
    }

    /// Explicit progress file (`--progress` / `MALLA_PROGRESS`).
    pub fn with_progress(mut self, progress: Option<PathBuf>) -> Self {
        self.progress = progress;
        self
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the curriculum file this context reads.
    pub fn curriculum_path(&self) -> PathBuf {
        match &self.config {
            Some(p) if p.is_absolute() => p.clone(),
            Some(p) => self.root.join(p),
            None => default_config_path(&self.root),
        }
    }

    /// Resolve a path given on the command line.
    pub fn resolve_user_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        }
    }

    /// Load the curriculum configuration without validating it.
    pub fn load_config(&self) -> Result<CurriculumConfig> {
        load_config(&self.root, self.config.as_deref())
    }

    /// Progress store for a loaded configuration.
    pub fn progress_store(&self, config: &CurriculumConfig) -> ProgressStore {
        ProgressStore::new(resolve_progress_path(
            &self.root,
            config,
            self.progress.as_deref(),
        ))
    }

    /// Load the curriculum and saved progress, with persistence subscribed.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` when there is no curriculum file
    /// - `ConfigParseError` / `ConfigValidationError` for a broken curriculum
    /// - `Io` when the progress file exists but cannot be read
    pub fn open_tracker(&self) -> Result<Tracker> {
        let config = self.load_config()?;
        let curriculum = Curriculum::from_config(&config)?;
        let store = self.progress_store(&config);
        let completed = store.load()?;

        tracing::debug!(
            "Opened tracker with {} of {} courses completed ({})",
            completed.len(),
            curriculum.len(),
            store.path().display()
        );

        let mut tracker = Tracker::new(curriculum, completed);
        tracker.subscribe(Box::new(store));
        Ok(tracker)
    }
}

/// Report a missing curriculum and return the matching result.
pub fn no_curriculum(ui: &mut dyn UserInterface) -> CommandResult {
    ui.error("No curriculum found. Run 'malla init' first.");
    CommandResult::failure(EXIT_NO_CURRICULUM)
}

/// Test helpers for command modules.
#[cfg(test)]
pub(crate) mod testing {
    use std::fs;

    use tempfile::TempDir;

    use super::ProjectContext;
    use crate::config::{CURRICULUM_FILE, MALLA_DIR, PROGRESS_FILE};

    /// Three courses over two semesters; `mat2` requires `mat1`, `fis2`
    /// requires `mat1` and `fis1`.
    pub const CURRICULUM: &str = r#"
name: Ingeniería
semesters:
  - name: Semestre 1
    courses:
      - id: mat1
        name: Cálculo I
        credits: 6
      - id: fis1
        name: Física I
        credits: 5
  - name: Semestre 2
    courses:
      - id: mat2
        name: Cálculo II
        credits: 6
        prerequisites: [mat1]
      - id: fis2
        name: Física II
        credits: 5
        prerequisites: [mat1, fis1]
"#;

    pub fn setup_project(curriculum: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(MALLA_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(CURRICULUM_FILE), curriculum).unwrap();
        temp
    }

    pub fn write_progress(temp: &TempDir, json: &str) {
        fs::write(temp.path().join(MALLA_DIR).join(PROGRESS_FILE), json).unwrap();
    }

    pub fn read_progress(temp: &TempDir) -> Option<String> {
        fs::read_to_string(temp.path().join(MALLA_DIR).join(PROGRESS_FILE)).ok()
    }

    pub fn context(temp: &TempDir) -> ProjectContext {
        ProjectContext::new(temp.path())
    }
}
