//! Ledger operation errors

use lib_types::Amount;
use thiserror::Error;

/// Error during ledger operations
///
/// Precondition failures leave state unchanged; the caller surfaces them to
/// the user and does not retry.
#[derive(Error, Debug, Clone)]
pub enum LedgerError {
    /// Setup could not seed or persist initial state
    #[error("Ledger initialization failed: {0}")]
    Initialization(String),

    /// No claimable reward with this id
    #[error("Reward not found: {0}")]
    RewardNotFound(String),

    /// Reward was already claimed once
    #[error("Reward already claimed: {0}")]
    AlreadyClaimed(String),

    /// Operation would drive the balance below zero
    #[error("Insufficient balance: have {have}, need {need}")]
    InsufficientBalance { have: Amount, need: Amount },

    /// Zero amount not allowed
    #[error("Zero amount not allowed")]
    ZeroAmount,

    /// Arithmetic overflow
    #[error("Arithmetic overflow")]
    Overflow,

    /// Persistence failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<lib_storage::StorageError> for LedgerError {
    fn from(err: lib_storage::StorageError) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

/// Result type for ledger operations
pub type LedgerResult<T> = std::result::Result<T, LedgerError>;
