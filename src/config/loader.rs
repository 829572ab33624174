use std::fs;
use std::path::{Path, PathBuf};

use super::core::ReadabilityConfig;
use crate::errors::{ReadabilityError, Result};

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".readscore.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse and validate config from a TOML string
pub fn parse_config(contents: &str) -> Result<ReadabilityConfig> {
    let config = toml::from_str::<ReadabilityConfig>(contents)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from an explicit path, failing on any problem
pub fn load_config_from_path(path: &Path) -> Result<ReadabilityConfig> {
    let contents = fs::read_to_string(path).map_err(|source| ReadabilityError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&contents)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading config from a specific path, logging instead of failing
fn try_load_config_from_path(config_path: &Path) -> Option<ReadabilityConfig> {
    match load_config_from_path(config_path) {
        Ok(config) => Some(config),
        Err(ReadabilityError::ConfigRead { source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            None
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Generate `start` and its ancestors, nearest first, up to a depth limit
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

/// Find the nearest `.readscore.toml` above `start`, or defaults
pub fn load_config_from(start: PathBuf) -> ReadabilityConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ReadabilityConfig::default()
        })
}

pub fn load_config() -> ReadabilityConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            ReadabilityConfig::default()
        }
    }
}
