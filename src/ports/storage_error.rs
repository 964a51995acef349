//! Storage errors shared by the bundle and result ports.

use std::path::PathBuf;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that can occur while reading bundles or writing results
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Input bundle not found: {0}")]
    NotFound(PathBuf),

    #[error("Unsupported bundle format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to serialize result: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize bundle: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        let code = match &err {
            StorageError::NotFound(_) => ErrorCode::InputNotFound,
            StorageError::UnsupportedFormat(_) | StorageError::DeserializationFailed(_) => {
                ErrorCode::ValidationFailed
            }
            StorageError::SerializationFailed(_) | StorageError::IoError(_) => {
                ErrorCode::StorageError
            }
        };
        DomainError::new(code, err.to_string())
    }
}
