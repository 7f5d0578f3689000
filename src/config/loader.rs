//! Curriculum file discovery and loading.
//!
//! The curriculum lives at `.malla/curriculum.yml` under the project root
//! unless an explicit path is given with `--config`.

use crate::config::schema::CurriculumConfig;
use crate::error::{MallaError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding malla files inside a project.
pub const MALLA_DIR: &str = ".malla";

/// Curriculum file name inside [`MALLA_DIR`].
pub const CURRICULUM_FILE: &str = "curriculum.yml";

/// Default progress file name inside [`MALLA_DIR`].
pub const PROGRESS_FILE: &str = "progress.json";

/// Default curriculum path for a project root.
pub fn default_config_path(project_root: &Path) -> PathBuf {
    project_root.join(MALLA_DIR).join(CURRICULUM_FILE)
}

/// Find the project root by walking up from `start`.
///
/// The first directory containing a `.malla` directory wins.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(MALLA_DIR).is_dir() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single curriculum file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<CurriculumConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            MallaError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            MallaError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`CurriculumConfig`].
///
/// `source_path` is only used for error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<CurriculumConfig> {
    serde_yaml::from_str(content).map_err(|e| MallaError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the curriculum for a project, honouring an explicit override path.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<CurriculumConfig> {
    let path = match explicit {
        Some(p) if p.is_absolute() => p.to_path_buf(),
        Some(p) => project_root.join(p),
        None => default_config_path(project_root),
    };

    tracing::debug!("Loading curriculum from {}", path.display());
    load_config_file(&path)
}

/// Resolve where progress is stored.
///
/// Precedence: explicit path, then `settings.progress_file`, then
/// `.malla/progress.json`. Relative paths are resolved against the project root.
pub fn resolve_progress_path(
    project_root: &Path,
    config: &CurriculumConfig,
    explicit: Option<&Path>,
) -> PathBuf {
    let chosen = explicit
        .map(Path::to_path_buf)
        .or_else(|| config.settings.progress_file.clone())
        .unwrap_or_else(|| PathBuf::from(MALLA_DIR).join(PROGRESS_FILE));

    if chosen.is_absolute() {
        chosen
    } else {
        project_root.join(chosen)
    }
}
