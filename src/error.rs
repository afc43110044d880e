// file: src/error.rs
// version: 1.0.0
// guid: df963904-4cdc-41c1-93e1-37437a2d2e4b

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Error types for the ZFS installer configuration tooling
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid {key} value: '{value}'")]
    Parse { key: &'static str, value: String },

    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Environment validation failed: {0}")]
    Environment(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl ConfigError {
    /// Create a new parse error for a configuration key
    pub fn parse(key: &'static str, value: impl Into<String>) -> Self {
        Self::Parse {
            key,
            value: value.into(),
        }
    }

    /// Create a new validation error from collected violations
    pub fn validation(violations: Vec<String>) -> Self {
        Self::Validation(violations)
    }

    /// Create a new environment error
    pub fn environment(msg: impl Into<String>) -> Self {
        Self::Environment(msg.into())
    }

    /// Create a new logging error
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }

    /// Create a new file read error
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }
}
