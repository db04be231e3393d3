//! Command handlers
//!
//! Handlers stay thin: read or mutate through the session, then print.
//! Formatting lives in pure helpers so it can be tested without I/O.

pub mod ledger;
pub mod network;
pub mod views;
