//! Canonical primitive types for ledger state
//!
//! These types are designed to be:
//! - Cheap to copy and compare
//! - Deterministically serializable
//! - Free of floating point (all monetary fields are integer token units)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Token amounts in whole token units
pub type Amount = u64;

/// Unix epoch milliseconds
pub type Timestamp = u64;

/// Current wall-clock time as unix epoch milliseconds
pub fn now_millis() -> Timestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

// ============================================================================
// TRANSACTION HASH
// ============================================================================

/// 32-byte synthetic transaction hash
///
/// This is an identifier, not a cryptographic commitment: the ledger is a
/// simulation and hashes are drawn from a random source at append time.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, Default)]
pub struct TxHash(pub [u8; 32]);

impl TxHash {
    /// Create a new TxHash from raw bytes
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Create a zeroed TxHash
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Draw a fresh synthetic hash
    pub fn synthetic() -> Self {
        use rand::RngCore;
        let mut bytes = [0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Get the underlying bytes
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Check if this is the zero hash
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxHash({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl From<[u8; 32]> for TxHash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for TxHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
