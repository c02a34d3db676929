//! Storage-specific error type wrapping driver errors.

use wares_domain::error::WaresError;

/// Errors originating from the MongoDB storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("document store driver error")]
    Driver(#[from] mongodb::error::Error),

    /// Failed to convert a value into a BSON document.
    #[error("BSON conversion error")]
    Bson(#[from] mongodb::bson::ser::Error),

    /// Failed to parse a bulk-load file as JSON.
    #[error("JSON parse error")]
    Json(#[from] serde_json::Error),

    /// Failed to read a bulk-load file or directory.
    #[error("file I/O error")]
    Io(#[from] std::io::Error),
}

impl From<StorageError> for WaresError {
    fn from(err: StorageError) -> Self {
        Self::Unexpected(Box::new(err))
    }
}
