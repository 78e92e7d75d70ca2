//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::UpdaterConfig;
use crate::error::{Result, UpdaterError};

/// Directory holding the updater's config and settings files.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("plugin-updater")
}

/// Default config file location (`<config dir>/plugin-updater/config.yml`).
pub fn default_config_path() -> PathBuf {
    config_dir().join("config.yml")
}

/// Load configuration.
///
/// An explicit path must exist. Without one, the default location is used
/// if present, otherwise the compiled-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<UpdaterConfig> {
    match explicit {
        Some(path) => load_config_file(path),
        None => {
            let path = default_config_path();
            if path.exists() {
                load_config_file(&path)
            } else {
                tracing::debug!("No config file at {:?}, using defaults", path);
                Ok(UpdaterConfig::default())
            }
        }
    }
}

/// Parse a single config file.
pub fn load_config_file(path: &Path) -> Result<UpdaterConfig> {
    let content = fs::read_to_string(path).map_err(|e| UpdaterError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    // An empty file means "all defaults"
    if content.trim().is_empty() {
        return Ok(UpdaterConfig::default());
    }

    let config: UpdaterConfig =
        serde_yaml::from_str(&content).map_err(|e| UpdaterError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let problems = config.validate();
    if !problems.is_empty() {
        return Err(UpdaterError::ConfigParse {
            path: path.to_path_buf(),
            message: problems.join("; "),
        });
    }

    tracing::debug!("Loaded config from {:?}", path);
    Ok(config)
}
