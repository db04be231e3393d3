//! Community activity view-model
//!
//! Ephemeral rows synthesized per refresh from transactions, check-ins,
//! and challenge progress. Never persisted.

use serde::Serialize;

use lib_types::{Amount, Timestamp};

/// Most entries a rendered feed may hold
pub const MAX_FEED_ENTRIES: usize = 50;

/// Days in the full challenge
pub const CHALLENGE_DAYS: usize = 21;

/// Fixed bonus shown on the synthetic challenge-completion row
pub const CHALLENGE_BONUS: Amount = 210;

/// What kind of activity a feed row describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    CheckIn,
    Validation,
    RewardClaim,
    Donation,
    ChallengeComplete,
}

/// One rendered feed row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunityActivity {
    /// Stable per-row id for render keying and test automation
    pub id: String,
    pub kind: ActivityKind,
    /// User the row is attributed to
    pub user: String,
    /// Human-readable summary
    pub message: String,
    /// Token amount, where the activity has one
    pub amount: Option<Amount>,
    pub timestamp: Timestamp,
}
