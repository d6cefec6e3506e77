//! Error types for the internal linking engine
//!
//! The linking pass itself never fails for "no good link" outcomes; those are
//! expected results of a heuristic process and surface only as reduced counts in
//! the run report. The variants here cover configuration and input plumbing,
//! which are programmer or operator errors and fail fast.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for linker operations
pub type LinkerResult<T> = Result<T, LinkerError>;

/// Error types for linker operations
#[derive(Debug, Error)]
pub enum LinkerError {
    /// Words-per-link range is empty or inverted
    #[error("Invalid words-per-link range ({min}, {max}): min must be > 0 and <= max")]
    InvalidWordsPerLink { min: usize, max: usize },

    /// A configuration value is outside its accepted range
    #[error("Invalid configuration value for '{field}': {message}")]
    InvalidConfig { field: &'static str, message: String },

    /// Configuration file could not be parsed
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// URL source could not be read
    #[error("Failed to read URL source {path}: {source}")]
    UrlSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LinkerError {
    /// Shorthand for an [`LinkerError::InvalidConfig`] value
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        LinkerError::InvalidConfig {
            field,
            message: message.into(),
        }
    }

    /// Check if the error was caused by configuration rather than input data
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            LinkerError::InvalidWordsPerLink { .. }
                | LinkerError::InvalidConfig { .. }
                | LinkerError::ConfigParse(_)
        )
    }
}
