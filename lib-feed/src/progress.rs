//! Challenge-progress blob parsing
//!
//! The check-in subsystem persists a camelCase JSON blob under
//! [`lib_storage::keys::CHALLENGE_PROGRESS`]. The feed only reads it. A
//! blob that fails to parse is logged and treated as absent, which
//! degrades to "no synthetic challenge activity" instead of failing the
//! whole refresh.

use serde::{Deserialize, Serialize};
use tracing::warn;

use lib_storage::{keys, KeyValueStore};

use crate::activity::CHALLENGE_DAYS;

/// Persisted challenge progress for the session's user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeProgress {
    /// Days completed so far, as day numbers
    pub completed_days: Vec<u32>,
    /// Calendar date of the latest check-in
    pub last_check_in_date: Option<String>,
}

impl ChallengeProgress {
    /// Whether the full challenge is complete (exactly all 21 days)
    pub fn is_complete(&self) -> bool {
        self.completed_days.len() == CHALLENGE_DAYS
    }

    /// Load from the store, degrading to `None` on a missing, unreadable,
    /// or corrupt blob.
    pub async fn load(store: &dyn KeyValueStore) -> Option<Self> {
        let raw = match store.get(keys::CHALLENGE_PROGRESS).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "challenge progress unreadable");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(progress) => Some(progress),
            Err(e) => {
                warn!(error = %e, "challenge progress blob failed to parse");
                None
            }
        }
    }
}
