//! Error types for the Jira client.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring or calling the tracker.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Configuration file missing or unreadable.
    #[error("read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON or misses required keys.
    #[error("parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Network request failed.
    #[error("network error: {0}")]
    Network(String),

    /// Jira rejected the request.
    #[error("jira returned {status}: {message}")]
    Api { status: u16, message: String },
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
