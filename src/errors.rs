//! Shared error types for the application.
//!
//! The classifiers themselves never fail; these errors come from the edges
//! (answer store, configuration, export, clipboard, question lookup).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lineage-map operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// A question id that neither survey defines
    #[error("Unknown question id: {0}")]
    UnknownQuestion(String),

    /// Decision-table export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Clipboard errors
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Configuration file that is not valid TOML for [`LineageConfig`]
    ///
    /// [`LineageConfig`]: crate::config::LineageConfig
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    /// Wrap an I/O error with the path it happened on
    pub fn io_at(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::FileSystem {
            message: format!("{}: {}", path.display(), source),
            path: Some(path),
            source: Some(source),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
