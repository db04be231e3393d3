//! Check-in records produced by the external check-in subsystem
//!
//! The ledger core consumes these read-only; it never creates or mutates
//! them. The wire shape is camelCase JSON shared with the check-in service.

use serde::{Deserialize, Serialize};

use crate::primitives::Timestamp;

/// One daily check-in by one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    /// Stable record id
    pub id: String,
    /// User who checked in
    pub user_id: String,
    /// Challenge day number (1-based)
    pub day: u32,
    /// When the check-in happened
    pub timestamp: Timestamp,
    /// Like count
    pub likes: u32,
    /// Users who liked, in like order (oldest first)
    pub liked_by: Vec<String>,
}

impl CheckIn {
    /// The most recent liker, if anyone liked this check-in
    pub fn latest_liker(&self) -> Option<&str> {
        self.liked_by.last().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CheckIn {
        CheckIn {
            id: "ci-1".to_string(),
            user_id: "ada".to_string(),
            day: 3,
            timestamp: 1_700_000_000_000,
            likes: 2,
            liked_by: vec!["bert".to_string(), "carla".to_string()],
        }
    }

    #[test]
    fn test_latest_liker_is_last_entry() {
        assert_eq!(sample().latest_liker(), Some("carla"));
    }

    #[test]
    fn test_latest_liker_empty() {
        let mut ci = sample();
        ci.likes = 0;
        ci.liked_by.clear();
        assert_eq!(ci.latest_liker(), None);
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("userId").is_some());
        assert!(json.get("likedBy").is_some());
        assert!(json.get("user_id").is_none());
    }
}
