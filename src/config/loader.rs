//! Configuration file discovery and loading.

use crate::config::schema::ChecksConfig;
use crate::error::{ConformityError, Result};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional project configuration file.
pub const CONFIG_FILE_NAME: &str = ".conformity.yml";

/// Default configuration path for a project.
pub fn default_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}

/// Load the configuration for a project.
///
/// An explicit path must exist. Without one, `.conformity.yml` in the
/// project root is used if present, and defaults otherwise.
///
/// # Errors
///
/// Returns `ConfigNotFound` if an explicit file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<ChecksConfig> {
    match explicit {
        Some(path) => load_config_file(path),
        None => {
            let path = default_config_path(project_root);
            if path.exists() {
                load_config_file(&path)
            } else {
                tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                Ok(ChecksConfig::default())
            }
        }
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist, and `Other` if it
/// exists but cannot be read.
pub fn load_config_file(path: &Path) -> Result<ChecksConfig> {
    let content = match fs::read_to_string(path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConformityError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        read => read.with_context(|| format!("Failed to read config {}", path.display()))?,
    };

    parse_config(&content, path)
}

/// Parse YAML content into a config. An empty document yields defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ChecksConfig> {
    if content.trim().is_empty() {
        return Ok(ChecksConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| ConformityError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
