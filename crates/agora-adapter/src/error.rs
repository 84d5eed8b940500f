//! Error types for the adapter layer

use agora_domain::RepositoryError;
use thiserror::Error;

/// Failure reading or writing a file-backed store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<StoreError> for RepositoryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Io(e) => RepositoryError::Unavailable {
                message: e.to_string(),
            },
            StoreError::Json(e) => RepositoryError::Malformed {
                message: e.to_string(),
            },
        }
    }
}
