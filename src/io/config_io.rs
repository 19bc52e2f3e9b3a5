use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::AppConfig;

pub const CONFIG_FILE: &str = "taskgrid.toml";

/// Error type for config I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Walk up from `start` looking for a taskgrid.toml
pub fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Read and parse a config file
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load the config in effect: an explicit path must exist; otherwise the
/// discovered file is used, and defaults apply when there is none.
pub fn load_config(explicit: Option<&Path>, start: &Path) -> Result<AppConfig, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match discover_config(start) {
            Some(path) => path,
            None => {
                tracing::debug!(start = %start.display(), "no config found, using defaults");
                return Ok(AppConfig::default());
            }
        },
    };
    tracing::debug!(path = %path.display(), "loading config");
    read_config(&path)
}

/// [`load_config`] starting from the current directory
pub fn load_config_cwd(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let cwd = std::env::current_dir()?;
    load_config(explicit, &cwd)
}
