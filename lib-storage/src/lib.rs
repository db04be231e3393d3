//! Client-Local Persistence for the VEG21 Ledger Core
//!
//! Models the browser local-storage bucket one simulated wallet session
//! writes into: string keys, small opaque string values, lossless
//! round-trips. Backends are pluggable behind [`KeyValueStore`]; the two
//! provided implementations are an in-memory map (tests, demos) and a
//! single-document JSON file (one session on disk).
//!
//! Durability is explicitly not a goal. The file backend rewrites its whole
//! document on every mutation, which is the right shape for a bucket that
//! holds a few kilobytes of session state.

pub mod error;
pub mod file;
pub mod keys;
pub mod memory;
pub mod traits;

pub use error::{StorageError, StorageResult};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
