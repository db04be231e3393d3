//! Default seed state for a fresh wallet session

use lib_types::Amount;

use crate::types::{ClaimableReward, LedgerState, TokenBalance};

/// Primary-token balance a fresh session starts with
pub const DEFAULT_PRIMARY_BALANCE: Amount = 100;

/// Secondary-token balance a fresh session starts with
pub const DEFAULT_SECONDARY_BALANCE: Amount = 0;

/// Tokens credited for one recorded daily check-in
pub const CHECK_IN_REWARD: Amount = 5;

fn reward(id: &str, description: &str, amount: Amount, unlocked: bool) -> ClaimableReward {
    ClaimableReward {
        id: id.to_string(),
        description: description.to_string(),
        amount,
        unlocked,
        claimed: false,
    }
}

/// The reward catalog every fresh session is seeded with
///
/// Only the first entry starts unlocked; the rest unlock as milestone
/// events arrive from the challenge subsystem.
pub fn default_rewards() -> Vec<ClaimableReward> {
    vec![
        reward("first-steps", "Complete your first daily check-in", 10, true),
        reward("week-one", "Seven consecutive plant-based days", 50, false),
        reward("fortnight", "Fourteen consecutive plant-based days", 75, false),
        reward(
            "challenge-complete",
            "Finish the full 21-day challenge",
            210,
            false,
        ),
        reward(
            "first-contribution",
            "Make your first charity contribution",
            25,
            false,
        ),
    ]
}

/// Full default state: seeded balances, reward catalog, empty logs
pub fn seed_state() -> LedgerState {
    LedgerState {
        balance: TokenBalance::new(DEFAULT_PRIMARY_BALANCE, DEFAULT_SECONDARY_BALANCE),
        staked: 0,
        rewards: default_rewards(),
        contributions: Vec::new(),
        transactions: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_balance_matches_defaults() {
        let state = seed_state();
        assert_eq!(state.balance.primary, DEFAULT_PRIMARY_BALANCE);
        assert_eq!(state.balance.secondary, DEFAULT_SECONDARY_BALANCE);
        assert!(state.transactions.is_empty());
        assert!(state.contributions.is_empty());
    }

    #[test]
    fn test_seed_rewards_have_unique_ids() {
        let rewards = default_rewards();
        let mut ids: Vec<_> = rewards.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), rewards.len());
    }

    #[test]
    fn test_only_first_steps_starts_unlocked() {
        let claimable = seed_state().claimable_rewards();
        assert_eq!(claimable.len(), 1);
        assert_eq!(claimable[0].id, "first-steps");
    }
}
