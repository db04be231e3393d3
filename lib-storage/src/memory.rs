//! In-memory store backend

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StorageResult;
use crate::traits::{validate_key, validate_value, KeyValueStore};

/// HashMap-backed store for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the store holds no entries
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn put(&self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;
        validate_value(value)?;
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        validate_key(key)?;
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn clear(&self) -> StorageResult<()> {
        self.entries.write().await.clear();
        Ok(())
    }
}
