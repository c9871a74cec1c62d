//! Storage error taxonomy.
//!
//! Errors carry an HTTP-like status and a stable error-code string so
//! callers can surface a code/message pair without knowing which client
//! implementation produced the failure.

use thiserror::Error;

/// Failure reported by a storage service client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The named container does not exist.
    #[error("container not found: {0}")]
    ContainerNotFound(String),

    /// The named blob does not exist in the container.
    #[error("blob not found: {0}")]
    BlobNotFound(String),

    /// The container or blob name violates the service naming rules.
    #[error("invalid resource name: {0}")]
    InvalidResourceName(String),

    /// The service is temporarily unable to handle the request.
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    /// Unexpected failure inside the client.
    #[error("internal storage failure: {0}")]
    Internal(String),
}

impl StorageError {
    /// Stable error-code string, in the service's vocabulary.
    pub fn code(&self) -> &'static str {
        match self {
            StorageError::ContainerNotFound(_) => "ContainerNotFound",
            StorageError::BlobNotFound(_) => "BlobNotFound",
            StorageError::InvalidResourceName(_) => "InvalidResourceName",
            StorageError::Unavailable(_) => "ServerBusy",
            StorageError::Internal(_) => "InternalError",
        }
    }

    /// HTTP-like status code associated with this failure.
    pub fn status(&self) -> u16 {
        match self {
            StorageError::ContainerNotFound(_) | StorageError::BlobNotFound(_) => 404,
            StorageError::InvalidResourceName(_) => 400,
            StorageError::Unavailable(_) => 503,
            StorageError::Internal(_) => 500,
        }
    }
}

/// Convenience Result type for storage client operations.
pub type StorageResult<T> = std::result::Result<T, StorageError>;
