use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading or writing local storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access storage file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage file '{path}' is corrupted: {source}")]
    Corrupted {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Value for key '{key}' has an unexpected type: {source}")]
    InvalidValue {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
