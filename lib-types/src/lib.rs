//! Shared Primitive Types for the VEG21 Ledger Core
//!
//! Foundational building blocks used across the ledger, feed, and chain
//! crates. Nothing in here carries behavior beyond construction, display,
//! and serialization.
//!
//! # Key Types
//!
//! - [`Amount`]: token quantities (non-negative integers)
//! - [`Timestamp`]: unix epoch milliseconds
//! - [`TxHash`]: synthetic 32-byte transaction identifier
//! - [`CheckIn`]: the read-only record produced by the check-in subsystem

pub mod check_in;
pub mod primitives;

pub use check_in::CheckIn;
pub use primitives::{now_millis, Amount, Timestamp, TxHash};
