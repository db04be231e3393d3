//! Ledger state structures
//!
//! All of this serializes to one JSON document per wallet session and must
//! round-trip losslessly through the key-value store.

use serde::{Deserialize, Serialize};

use lib_types::{now_millis, Amount, Timestamp, TxHash};

// ============================================================================
// BALANCES
// ============================================================================

/// Token balances for one wallet session
///
/// Mutated only by ledger operations; never negative. Operations enforce
/// this with preconditions rather than clamping after the fact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBalance {
    /// Primary challenge token (VEG)
    pub primary: Amount,
    /// Secondary governance token (SPROUT)
    pub secondary: Amount,
}

impl TokenBalance {
    /// Create a balance pair
    pub const fn new(primary: Amount, secondary: Amount) -> Self {
        Self { primary, secondary }
    }
}

// ============================================================================
// REWARDS
// ============================================================================

/// A reward the wallet can eventually claim
///
/// Lifecycle: seeded locked or unlocked, `unlocked` flips once on a
/// milestone, `claimed` flips once on claim and never reverts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimableReward {
    /// Stable reward id
    pub id: String,
    /// Human-readable description
    pub description: String,
    /// Tokens credited on claim
    pub amount: Amount,
    /// Whether the milestone has been reached
    pub unlocked: bool,
    /// Whether the reward was already claimed
    pub claimed: bool,
}

impl ClaimableReward {
    /// Whether this reward can be claimed right now
    pub fn is_claimable(&self) -> bool {
        self.unlocked && !self.claimed
    }
}

// ============================================================================
// CONTRIBUTIONS
// ============================================================================

/// Append-only record of a charity contribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRecord {
    /// Stable record id
    pub id: String,
    /// Charity that received the contribution
    pub charity_id: String,
    /// Tokens contributed
    pub amount: Amount,
    /// When the contribution happened
    pub timestamp: Timestamp,
}

impl ContributionRecord {
    /// Create a record stamped with the current time
    pub fn new(charity_id: impl Into<String>, amount: Amount) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            charity_id: charity_id.into(),
            amount,
            timestamp: now_millis(),
        }
    }
}

// ============================================================================
// TRANSACTIONS
// ============================================================================

/// What a ledger transaction did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxKind {
    ClaimReward,
    Contribute,
    Transfer,
    Receive,
    StakeTokens,
    UnstakeTokens,
    CheckIn,
    Validation,
}

/// Settlement status of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxStatus {
    Pending,
    Confirmed,
    Failed,
}

/// One append-only ledger entry
///
/// Every balance-affecting operation produces exactly one of these. The
/// hash is a synthetic identifier, not a cryptographic commitment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerTransaction {
    /// Stable record id
    pub id: String,
    /// Operation that produced this entry
    pub kind: TxKind,
    /// Unsigned amount moved
    pub amount: Amount,
    /// Synthetic transaction hash
    pub tx_hash: TxHash,
    /// Sending party, where the operation has one
    pub from: Option<String>,
    /// Receiving party, where the operation has one
    pub to: Option<String>,
    /// Settlement status
    pub status: TxStatus,
    /// When the transaction was appended
    pub timestamp: Timestamp,
    /// Free-form operation detail
    pub metadata: Option<serde_json::Value>,
}

impl LedgerTransaction {
    /// Create a confirmed transaction stamped with the current time
    pub fn new(kind: TxKind, amount: Amount) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            amount,
            tx_hash: TxHash::synthetic(),
            from: None,
            to: None,
            status: TxStatus::Confirmed,
            timestamp: now_millis(),
            metadata: None,
        }
    }
}

// ============================================================================
// SESSION STATE
// ============================================================================

/// Everything the ledger persists for one wallet session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerState {
    /// Spendable balances
    pub balance: TokenBalance,
    /// Tokens locked in the staking bucket
    pub staked: Amount,
    /// Reward catalog with unlock/claim flags
    pub rewards: Vec<ClaimableReward>,
    /// Append-only contribution records
    pub contributions: Vec<ContributionRecord>,
    /// Append-only transaction log, in insertion order
    pub transactions: Vec<LedgerTransaction>,
}

impl LedgerState {
    /// Rewards currently claimable (`unlocked && !claimed`)
    pub fn claimable_rewards(&self) -> Vec<ClaimableReward> {
        self.rewards
            .iter()
            .filter(|r| r.is_claimable())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_claimable_filter() {
        let reward = ClaimableReward {
            id: "r".to_string(),
            description: "d".to_string(),
            amount: 1,
            unlocked: true,
            claimed: false,
        };
        assert!(reward.is_claimable());

        let claimed = ClaimableReward {
            claimed: true,
            ..reward.clone()
        };
        assert!(!claimed.is_claimable());

        let locked = ClaimableReward {
            unlocked: false,
            ..reward
        };
        assert!(!locked.is_claimable());
    }

    #[test]
    fn test_state_roundtrips_through_json() {
        let state = LedgerState {
            balance: TokenBalance::new(100, 0),
            staked: 25,
            rewards: vec![ClaimableReward {
                id: "r1".to_string(),
                description: "First steps".to_string(),
                amount: 10,
                unlocked: true,
                claimed: false,
            }],
            contributions: vec![ContributionRecord::new("charity-a", 5)],
            transactions: vec![LedgerTransaction::new(TxKind::Contribute, 5)],
        };

        let raw = serde_json::to_string(&state).unwrap();
        let back: LedgerState = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_tx_kind_wire_names_are_snake_case() {
        let raw = serde_json::to_string(&TxKind::ClaimReward).unwrap();
        assert_eq!(raw, "\"claim_reward\"");
        let raw = serde_json::to_string(&TxKind::StakeTokens).unwrap();
        assert_eq!(raw, "\"stake_tokens\"");
    }
}
