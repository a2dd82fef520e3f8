//! Error types for settings and other host-side helpers
//!
//! The interaction core itself never fails; only loading, saving and
//! watching configuration can.

use thiserror::Error;

/// Errors from settings I/O, parsing, validation and file watching
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// File watcher error from notify
    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),

    /// A value parsed but is out of range
    #[error("Invalid setting: {0}")]
    Invalid(String),

    /// Generic error message
    #[error("{0}")]
    Other(String),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

impl From<String> for ConfigError {
    fn from(s: String) -> Self {
        ConfigError::Other(s)
    }
}

impl From<&str> for ConfigError {
    fn from(s: &str) -> Self {
        ConfigError::Other(s.to_string())
    }
}
