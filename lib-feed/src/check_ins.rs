//! Contract with the external check-in subsystem
//!
//! The feed consumes check-in records read-only. [`InMemoryCheckInStore`]
//! stands in for the real subsystem in tests and offline demos.

use async_trait::async_trait;
use tokio::sync::RwLock;

use lib_types::CheckIn;

/// Read-only source of check-in records
#[async_trait]
pub trait CheckInProvider: Send + Sync {
    /// Every known check-in, in record order
    async fn all_check_ins(&self) -> Vec<CheckIn>;

    /// Check-ins for one user
    async fn user_check_ins(&self, user_id: &str) -> Vec<CheckIn> {
        self.all_check_ins()
            .await
            .into_iter()
            .filter(|ci| ci.user_id == user_id)
            .collect()
    }
}

/// In-process check-in source
#[derive(Debug, Default)]
pub struct InMemoryCheckInStore {
    check_ins: RwLock<Vec<CheckIn>>,
}

impl InMemoryCheckInStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one check-in record
    pub async fn add(&self, check_in: CheckIn) {
        self.check_ins.write().await.push(check_in);
    }
}

#[async_trait]
impl CheckInProvider for InMemoryCheckInStore {
    async fn all_check_ins(&self) -> Vec<CheckIn> {
        self.check_ins.read().await.clone()
    }
}
