//! Single-document JSON file backend
//!
//! The whole store is one JSON object on disk, loaded at open and rewritten
//! on every mutation. That matches the medium being modeled: a per-session
//! local-storage bucket of a few kilobytes, where lossless round-trips
//! matter and write amplification does not.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::{StorageError, StorageResult};
use crate::traits::{validate_key, validate_value, KeyValueStore};

/// File-backed store holding one JSON document
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Open a store at `path`, loading the existing document if present.
    ///
    /// A document that exists but does not parse is reported as
    /// [`StorageError::Corrupt`] so the caller can decide its own fallback
    /// policy.
    pub async fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => serde_json::from_str::<HashMap<String, String>>(&raw)
                .map_err(|e| StorageError::Corrupt(format!("{}: {e}", path.display())))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                return Err(StorageError::OpenFailed(format!(
                    "{}: {e}",
                    path.display()
                )))
            }
        };
        debug!(path = %path.display(), entries = entries.len(), "opened json store");
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Open a store, starting empty instead of failing when the existing
    /// document is unreadable or corrupt.
    pub async fn open_lossy(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();
        match Self::open(&path).await {
            Ok(store) => Ok(store),
            Err(StorageError::Corrupt(reason)) | Err(StorageError::OpenFailed(reason)) => {
                warn!(%reason, "store unreadable, starting from an empty document");
                Ok(Self {
                    path,
                    entries: RwLock::new(HashMap::new()),
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, entries: &HashMap<String, String>) -> StorageResult<()> {
        let raw = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
            }
        }
        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| StorageError::WriteFailed(format!("{}: {e}", self.path.display())))
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn put(&self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;
        validate_value(value)?;
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries).await
    }

    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        validate_key(key)?;
        let mut entries = self.entries.write().await;
        if entries.remove(key).is_some() {
            self.persist(&entries).await?;
        }
        Ok(())
    }

    async fn clear(&self) -> StorageResult<()> {
        let mut entries = self.entries.write().await;
        entries.clear();
        self.persist(&entries).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_roundtrip_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        {
            let store = JsonFileStore::open(&path).await.unwrap();
            store.put("veg21.username", "ada").await.unwrap();
            store.put("veg21.other", "x").await.unwrap();
        }

        let reopened = JsonFileStore::open(&path).await.unwrap();
        assert_eq!(
            reopened.get("veg21.username").await.unwrap(),
            Some("ada".to_string())
        );
        assert_eq!(reopened.get("veg21.other").await.unwrap(), Some("x".to_string()));
    }

    #[tokio::test]
    async fn test_corrupt_document_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        tokio::fs::write(&path, "not json at all").await.unwrap();

        assert!(matches!(
            JsonFileStore::open(&path).await,
            Err(StorageError::Corrupt(_))
        ));
    }

    #[tokio::test]
    async fn test_open_lossy_recovers_from_corrupt_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        tokio::fs::write(&path, "{broken").await.unwrap();

        let store = JsonFileStore::open_lossy(&path).await.unwrap();
        assert_eq!(store.get("anything").await.unwrap(), None);

        store.put("k", "v").await.unwrap();
        let reopened = JsonFileStore::open(&path).await.unwrap();
        assert_eq!(reopened.get("k").await.unwrap(), Some("v".to_string()));
    }

    #[tokio::test]
    async fn test_missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("fresh.json"))
            .await
            .unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        {
            let store = JsonFileStore::open(&path).await.unwrap();
            store.put("k", "v").await.unwrap();
            store.delete("k").await.unwrap();
        }
        let reopened = JsonFileStore::open(&path).await.unwrap();
        assert_eq!(reopened.get("k").await.unwrap(), None);
    }
}
