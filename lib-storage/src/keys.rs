//! Well-known key namespace
//!
//! Every key this application writes lives under the `veg21.` prefix so a
//! shared bucket can be swept without touching foreign entries.

/// Display name chosen during onboarding
pub const USERNAME: &str = "veg21.username";

/// Challenge progress blob owned by the check-in subsystem
/// (camelCase JSON: `completedDays`, `lastCheckInDate`)
pub const CHALLENGE_PROGRESS: &str = "veg21.challenge_progress";

/// Namespace prefix for all application keys
pub const PREFIX: &str = "veg21.";

/// Ledger state document for one wallet session
pub fn ledger_state(wallet_address: &str) -> String {
    format!("veg21.ledger.{wallet_address}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_key_is_per_wallet() {
        let a = ledger_state("0xaaa");
        let b = ledger_state("0xbbb");
        assert_ne!(a, b);
        assert!(a.starts_with(PREFIX));
    }
}
