//! Backend integration tests
//!
//! Cross-cutting checks the per-backend unit tests do not cover: trait
//! compliance run against every implementation, concurrent access, and
//! recovery of the file backend across reopen.

use std::sync::Arc;

use tokio::sync::Barrier;

use lib_storage::{JsonFileStore, KeyValueStore, MemoryStore, StorageError};

// ============================================================================
// Trait Compliance
// ============================================================================

/// CRUD behavior every backend must share
async fn assert_crud<S: KeyValueStore>(store: &S) {
    store.put("veg21.a", "1").await.unwrap();
    store.put("veg21.b", "2").await.unwrap();
    assert_eq!(store.get("veg21.a").await.unwrap(), Some("1".to_string()));
    assert_eq!(store.get("veg21.b").await.unwrap(), Some("2".to_string()));

    // Overwrite
    store.put("veg21.a", "3").await.unwrap();
    assert_eq!(store.get("veg21.a").await.unwrap(), Some("3".to_string()));

    // Contains and delete
    assert!(store.contains("veg21.a").await.unwrap());
    store.delete("veg21.a").await.unwrap();
    assert!(!store.contains("veg21.a").await.unwrap());
    assert_eq!(store.get("veg21.a").await.unwrap(), None);

    // Clear
    store.clear().await.unwrap();
    assert_eq!(store.get("veg21.b").await.unwrap(), None);
}

/// Validation behavior every backend must share
async fn assert_validation<S: KeyValueStore>(store: &S) {
    assert!(matches!(
        store.put("", "v").await,
        Err(StorageError::EmptyKey)
    ));
    let oversized_key = "k".repeat(1000);
    assert!(matches!(
        store.put(&oversized_key, "v").await,
        Err(StorageError::KeyTooLarge { .. })
    ));
}

#[tokio::test]
async fn memory_store_complies_with_trait() {
    let store = MemoryStore::new();
    assert_crud(&store).await;
    assert_validation(&store).await;
}

#[tokio::test]
async fn file_store_complies_with_trait() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("session.json"))
        .await
        .unwrap();
    assert_crud(&store).await;
    assert_validation(&store).await;
}

// ============================================================================
// Concurrent Access
// ============================================================================

#[tokio::test]
async fn concurrent_writers_do_not_lose_entries() {
    let store = Arc::new(MemoryStore::new());
    let workers = 16;
    let barrier = Arc::new(Barrier::new(workers));

    let mut handles = Vec::new();
    for worker in 0..workers {
        let store = store.clone();
        let barrier = barrier.clone();
        handles.push(tokio::spawn(async move {
            barrier.wait().await;
            for i in 0..25 {
                let key = format!("veg21.w{worker}.k{i}");
                store.put(&key, &i.to_string()).await.unwrap();
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.len().await, workers * 25);
    assert_eq!(
        store.get("veg21.w7.k13").await.unwrap(),
        Some("13".to_string())
    );
}

// ============================================================================
// File Backend Recovery
// ============================================================================

#[tokio::test]
async fn file_store_recovers_full_contents_after_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    {
        let store = JsonFileStore::open(&path).await.unwrap();
        for i in 0..50 {
            store
                .put(&format!("veg21.k{i}"), &format!("value-{i}"))
                .await
                .unwrap();
        }
        store.delete("veg21.k0").await.unwrap();
    }

    let store = JsonFileStore::open(&path).await.unwrap();
    assert_eq!(store.get("veg21.k0").await.unwrap(), None);
    for i in 1..50 {
        assert_eq!(
            store.get(&format!("veg21.k{i}")).await.unwrap(),
            Some(format!("value-{i}"))
        );
    }
}
