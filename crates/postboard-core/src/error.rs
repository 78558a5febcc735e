//! Domain-level error types.

use thiserror::Error;

use crate::domain::{PostId, ValidationErrors};

/// Domain errors - failures the user is told about.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post not found: {id}")]
    NotFound { id: PostId },

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
}

/// Storage-level errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Read failed: {0}")]
    Read(String),

    #[error("Write failed: {0}")]
    Write(String),
}

/// Failure to mirror the collection to storage. Logged, never surfaced.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
