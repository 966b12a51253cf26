//! Application-level errors

use std::path::PathBuf;
use thiserror::Error;

/// Application errors. Domain decoding failures (e.g. an invalid level rank)
/// arrive wrapped in [`ApplicationError::Decode`].
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("config error: {message}")]
    Config { message: String },

    #[error("region not found: {0}")]
    RegionNotFound(String),

    #[error("cannot decode regions from {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
