//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::schema::DoctorConfig;
use crate::error::{DoctorError, Result};

/// Location of the user's config: `~/.devdoctor/config.yml`.
pub fn user_config_path() -> Option<PathBuf> {
    Some(dirs::home_dir()?.join(".devdoctor").join("config.yml"))
}

/// Load the effective configuration.
///
/// An explicit path must exist. Without one, the user config is read if
/// present, and defaults are used otherwise.
///
/// # Errors
///
/// Returns `ConfigNotFound` if an explicit path doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config(explicit: Option<&Path>) -> Result<DoctorConfig> {
    if let Some(path) = explicit {
        debug!("Loading config from {}", path.display());
        return load_config_file(path);
    }

    match user_config_path() {
        Some(path) if path.is_file() => {
            debug!("Loading user config from {}", path.display());
            load_config_file(&path)
        }
        _ => {
            debug!("No config file found, using defaults");
            Ok(DoctorConfig::default())
        }
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<DoctorConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DoctorError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DoctorError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a `DoctorConfig`.
///
/// An empty file is treated as an empty config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<DoctorConfig> {
    if content.trim().is_empty() {
        return Ok(DoctorConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| DoctorError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
