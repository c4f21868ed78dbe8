use std::fs;
use std::path::{Path, PathBuf};

use super::core::HomeprintConfig;
use crate::errors::FootprintError;

pub const CONFIG_FILE_NAME: &str = ".homeprint.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    fs::read_to_string(path)
}

/// Parse config from a TOML string, dropping values that cannot be used.
pub fn parse_config(contents: &str) -> Result<HomeprintConfig, FootprintError> {
    let config = toml::from_str::<HomeprintConfig>(contents)
        .map_err(|e| FootprintError::config(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))?;

    for warning in config.warnings() {
        tracing::warn!("Ignoring config value: {}", warning);
    }

    Ok(config)
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<HomeprintConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Only log actual errors, not "file not found".
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` followed by its ancestors, at most `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load the nearest config searching upwards from `start`.
pub fn load_config_from(start: PathBuf) -> HomeprintConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            HomeprintConfig::default()
        })
}

/// Load the nearest config searching upwards from the working directory.
pub fn load_config() -> HomeprintConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            HomeprintConfig::default()
        }
    }
}
