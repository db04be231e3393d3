//! Storage errors

use thiserror::Error;

/// Errors raised by key-value store backends
#[derive(Debug, Error)]
pub enum StorageError {
    /// Store failed to open
    #[error("Store open failed: {0}")]
    OpenFailed(String),

    /// Persisted document exists but cannot be parsed
    #[error("Store document is corrupt: {0}")]
    Corrupt(String),

    /// Read operation failed
    #[error("Read failed: {0}")]
    ReadFailed(String),

    /// Write operation failed
    #[error("Write failed: {0}")]
    WriteFailed(String),

    /// Empty key not allowed
    #[error("Empty keys are not allowed")]
    EmptyKey,

    /// Key exceeds maximum allowed size
    #[error("Key exceeds maximum size of {max} bytes (got {actual})")]
    KeyTooLarge { max: usize, actual: usize },

    /// Value exceeds maximum allowed size
    #[error("Value exceeds maximum size of {max} bytes (got {actual})")]
    ValueTooLarge { max: usize, actual: usize },
}

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;
