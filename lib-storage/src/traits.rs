//! Key-value store trait
//!
//! ## Example
//! ```rust,ignore
//! use lib_storage::KeyValueStore;
//!
//! async fn save_name<S: KeyValueStore>(store: &S) -> lib_storage::StorageResult<()> {
//!     store.put("veg21.username", "ada").await?;
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;

use crate::error::{StorageError, StorageResult};

/// Maximum key size in bytes
pub const MAX_KEY_SIZE: usize = 256;

/// Maximum value size in bytes (1 MB)
pub const MAX_VALUE_SIZE: usize = 1024 * 1024;

/// Async key-value store abstraction
///
/// Values are opaque UTF-8 strings; callers serialize their own records and
/// must get back exactly what they stored.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Store a key-value pair, overwriting any previous value.
    async fn put(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Retrieve a value by key.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Delete a key. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// Check if a key exists.
    async fn contains(&self, key: &str) -> StorageResult<bool> {
        Ok(self.get(key).await?.is_some())
    }

    /// Remove every entry.
    async fn clear(&self) -> StorageResult<()>;
}

/// Validate a key against size limits.
pub(crate) fn validate_key(key: &str) -> StorageResult<()> {
    if key.is_empty() {
        return Err(StorageError::EmptyKey);
    }
    if key.len() > MAX_KEY_SIZE {
        return Err(StorageError::KeyTooLarge {
            max: MAX_KEY_SIZE,
            actual: key.len(),
        });
    }
    Ok(())
}

/// Validate a value against size limits.
pub(crate) fn validate_value(value: &str) -> StorageResult<()> {
    if value.len() > MAX_VALUE_SIZE {
        return Err(StorageError::ValueTooLarge {
            max: MAX_VALUE_SIZE,
            actual: value.len(),
        });
    }
    Ok(())
}
