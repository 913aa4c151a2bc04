//! Configuration file discovery and loading.
//!
//! Config is optional. Without any file the Logstash defaults apply.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::merger::merge_configs;
use crate::config::schema::ImagetagConfig;
use crate::error::{ImagetagError, Result};

/// Directory holding project config files.
pub const CONFIG_DIR: &str = ".imagetag";

/// Paths to configuration files in merge order (later overrides earlier).
///
/// 1. Project config (`.imagetag/config.yml`)
/// 2. Local overrides (`.imagetag/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .imagetag/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .imagetag/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        let dir = project_root.join(CONFIG_DIR);
        Self {
            project: existing(dir.join("config.yml")),
            project_local: existing(dir.join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.is_file().then_some(path)
}

/// Find the project root by walking up from `start`.
///
/// Looks for a `.imagetag` directory first, then `.git`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(CONFIG_DIR).is_dir() || dir.join(".git").exists())
        .map(Path::to_path_buf)
}

fn read_yaml(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ImagetagError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ImagetagError::Io(e)
        }
    })?;

    // An empty file is valid and means "all defaults"
    if content.trim().is_empty() {
        return Ok(serde_yaml::Value::Mapping(Default::default()));
    }

    serde_yaml::from_str(&content).map_err(|e| ImagetagError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn from_value(value: serde_yaml::Value, path: &Path) -> Result<ImagetagConfig> {
    serde_yaml::from_value(value).map_err(|e| ImagetagError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid or has unknown keys.
pub fn load_config_file(path: &Path) -> Result<ImagetagConfig> {
    from_value(read_yaml(path)?, path)
}

/// Load and merge the project's config files, or defaults when none exist.
pub fn load_merged_config(project_root: &Path) -> Result<ImagetagConfig> {
    let paths = ConfigPaths::discover(project_root);
    let existing = paths.all_existing();

    let Some(last) = existing.last() else {
        tracing::debug!(root = %project_root.display(), "no config files, using defaults");
        return Ok(ImagetagConfig::default());
    };

    let values = existing
        .iter()
        .map(|path| read_yaml(path))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(files = ?existing, "loaded config");

    from_value(merge_configs(&values), last)
}

/// Load config with optional path override.
///
/// An override is loaded on its own, without local overrides, and must exist.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<ImagetagConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_merged_config(project_root),
    }
}
