//! Derived Views over the VEG21 Ledger
//!
//! Projects ledger transactions, external check-ins, and persisted
//! challenge progress into the two read models the application renders:
//! the community activity feed and the transaction history. Both are full
//! recomputations from source data on every refresh, never incremental
//! patches, so overlapping refresh triggers are harmless.
//!
//! [`FeedRefresher`] is the single reconciliation entry point: ledger
//! events and a fixed-interval timer both funnel into the same idempotent
//! recompute.

pub mod activity;
pub mod check_ins;
pub mod feed;
pub mod history;
pub mod progress;
pub mod refresh;

pub use activity::{ActivityKind, CommunityActivity, CHALLENGE_BONUS, CHALLENGE_DAYS, MAX_FEED_ENTRIES};
pub use check_ins::{CheckInProvider, InMemoryCheckInStore};
pub use feed::ActivityFeed;
pub use history::{transaction_history, HistoryRow, Sign};
pub use progress::ChallengeProgress;
pub use refresh::{FeedHandle, FeedRefresher, RefreshListener, REFRESH_INTERVAL};
