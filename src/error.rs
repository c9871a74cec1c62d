//! Error types for blob-console.

use thiserror::Error;

use crate::storage::StorageError;

/// Main error type for blob-console operations.
#[derive(Error, Debug)]
pub enum BlobConsoleError {
    /// Failure reported by the storage service client.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// I/O error on the console or the local data directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid menu transition attempted.
    #[error("invalid menu transition from {from:?} to {to:?}")]
    InvalidTransition {
        from: crate::session::MenuState,
        to: crate::session::MenuState,
    },
}

impl BlobConsoleError {
    /// Check whether this error came from the storage client.
    ///
    /// Storage failures are recoverable at the menu level; everything
    /// else ends the session.
    pub fn is_storage(&self) -> bool {
        matches!(self, BlobConsoleError::Storage(_))
    }
}

/// Convenience Result type for blob-console operations.
pub type Result<T> = std::result::Result<T, BlobConsoleError>;
