//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when using a key-value store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read or write the backing file.
    #[error("Store I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing file exists but does not hold a key-value object.
    #[error("Corrupt store at {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    /// The backend refused the operation.
    #[error("Store operation failed: {0}")]
    Backend(String),
}
