//! VEG21 Simulated Token Ledger
//!
//! Single source of truth for token balances, claimable rewards, charity
//! contributions, and the append-only transaction log of one simulated
//! wallet session. The ledger is an explicitly owned object built around an
//! injected [`lib_storage::KeyValueStore`]; it is created at session start
//! and dropped at session end, never a process-wide singleton.
//!
//! # Key Types
//!
//! - [`LedgerService`]: owns state and exposes every mutating operation
//! - [`LedgerEvent`] / [`EventPublisher`]: typed change notifications
//! - [`LedgerError`]: precondition and persistence failures
//!
//! # State-transition discipline
//!
//! Every mutating operation validates its preconditions against current
//! state, applies the change to a working copy, persists that copy, and
//! only then commits it and emits events. A failed operation leaves both
//! memory and the store untouched, and every balance-affecting success
//! appends exactly one transaction.

pub mod errors;
pub mod events;
pub mod seed;
pub mod service;
pub mod types;

pub use errors::{LedgerError, LedgerResult};
pub use events::{
    EventPublisher, LedgerEvent, LedgerEventListener, RecordingListener, SubscriptionId,
};
pub use seed::{default_rewards, seed_state, CHECK_IN_REWARD, DEFAULT_PRIMARY_BALANCE};
pub use service::LedgerService;
pub use types::{
    ClaimableReward, ContributionRecord, LedgerState, LedgerTransaction, TokenBalance, TxKind,
    TxStatus,
};
