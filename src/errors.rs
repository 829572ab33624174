//! Error types for the fallible edges of the crate.
//!
//! Scoring itself never fails: degenerate input degrades to non-numeric
//! scores instead. Errors only arise when building an engine from a
//! configuration (bad sentence pattern, nonsensical constants) or when
//! loading that configuration from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for readscore operations
#[derive(Debug, Error)]
pub enum ReadabilityError {
    /// The sentence boundary pattern failed to compile
    #[error("Invalid sentence boundary pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A configuration value is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration file could not be read
    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for our schema
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl ReadabilityError {
    /// Create a configuration validation error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Whether the user can fix this by editing their configuration
    pub fn is_user_fixable(&self) -> bool {
        !matches!(self, Self::ConfigRead { .. })
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, ReadabilityError>;
