//! Error types for ingest operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading a delimited file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// File missing or unreadable.
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    /// Tokenizer rejected a record.
    #[error("parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    /// File contained no rows at all. Reported to the user, never fatal
    /// to the process.
    #[error("empty file: {path}")]
    Empty { path: PathBuf },
}

/// Result type alias for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;
