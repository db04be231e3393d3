//! The ledger service
//!
//! Owns the session state behind a single async mutex and applies every
//! state transition with the same discipline: validate, mutate a working
//! copy, persist, commit, emit. Events are published after the state lock
//! is released so listeners are free to read back into the ledger.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use lib_storage::{keys, KeyValueStore};
use lib_types::Amount;

use crate::errors::{LedgerError, LedgerResult};
use crate::events::{EventPublisher, LedgerEvent};
use crate::seed;
use crate::types::{
    ClaimableReward, ContributionRecord, LedgerState, LedgerTransaction, TokenBalance, TxKind,
};

/// Simulated ledger for one wallet session
pub struct LedgerService {
    store: Arc<dyn KeyValueStore>,
    events: EventPublisher,
    wallet_address: String,
    state: Mutex<LedgerState>,
}

impl std::fmt::Debug for LedgerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerService")
            .field("wallet_address", &self.wallet_address)
            .finish()
    }
}

impl LedgerService {
    /// Set up the ledger for `wallet_address`.
    ///
    /// Idempotent: loads the persisted session document if one exists,
    /// otherwise seeds the default balance and reward catalog. An
    /// unreadable or corrupt document is logged and replaced by the seed
    /// rather than aborting the session; only a failure to persist that
    /// seed is fatal.
    pub async fn initialize(
        store: Arc<dyn KeyValueStore>,
        wallet_address: impl Into<String>,
    ) -> LedgerResult<Self> {
        let wallet_address = wallet_address.into();
        let key = keys::ledger_state(&wallet_address);

        let state = match store.get(&key).await {
            Ok(Some(raw)) => match serde_json::from_str::<LedgerState>(&raw) {
                Ok(state) => {
                    debug!(wallet = %wallet_address, txs = state.transactions.len(), "loaded persisted ledger state");
                    state
                }
                Err(e) => {
                    warn!(wallet = %wallet_address, error = %e, "persisted ledger state is corrupt, seeding defaults");
                    seed::seed_state()
                }
            },
            Ok(None) => {
                info!(wallet = %wallet_address, "no persisted ledger state, seeding defaults");
                seed::seed_state()
            }
            Err(e) => {
                warn!(wallet = %wallet_address, error = %e, "ledger state unreadable, seeding defaults");
                seed::seed_state()
            }
        };

        let service = Self {
            store,
            events: EventPublisher::new(),
            wallet_address,
            state: Mutex::new(state.clone()),
        };
        service
            .persist(&state)
            .await
            .map_err(|e| LedgerError::Initialization(e.to_string()))?;
        Ok(service)
    }

    /// Wallet address this session belongs to
    pub fn wallet_address(&self) -> &str {
        &self.wallet_address
    }

    /// Event channel for this ledger's lifetime
    pub fn events(&self) -> &EventPublisher {
        &self.events
    }

    // ========================================================================
    // READS
    // ========================================================================

    /// Snapshot of the full session state
    pub async fn state(&self) -> LedgerState {
        self.state.lock().await.clone()
    }

    /// Current balances
    pub async fn balance(&self) -> TokenBalance {
        self.state.lock().await.balance
    }

    /// Tokens currently staked
    pub async fn staked(&self) -> Amount {
        self.state.lock().await.staked
    }

    /// Full transaction log in insertion order
    pub async fn transactions(&self) -> Vec<LedgerTransaction> {
        self.state.lock().await.transactions.clone()
    }

    /// Rewards that are unlocked and not yet claimed
    pub async fn claimable_rewards(&self) -> Vec<ClaimableReward> {
        self.state.lock().await.claimable_rewards()
    }

    /// The whole reward catalog, locked and claimed entries included
    pub async fn all_rewards(&self) -> Vec<ClaimableReward> {
        self.state.lock().await.rewards.clone()
    }

    /// All contribution records in insertion order
    pub async fn contributions(&self) -> Vec<ContributionRecord> {
        self.state.lock().await.contributions.clone()
    }

    // ========================================================================
    // MUTATIONS
    // ========================================================================

    /// Claim an unlocked, unclaimed reward.
    ///
    /// Credits the reward amount to the primary balance and appends one
    /// confirmed `claim_reward` transaction. A locked reward is invisible
    /// to this path and fails as not found; a claimed reward always fails
    /// as already claimed. Failures leave state untouched.
    pub async fn claim_reward(&self, reward_id: &str) -> LedgerResult<LedgerTransaction> {
        let mut state = self.state.lock().await;
        let idx = state
            .rewards
            .iter()
            .position(|r| r.id == reward_id)
            .ok_or_else(|| LedgerError::RewardNotFound(reward_id.to_string()))?;
        if state.rewards[idx].claimed {
            return Err(LedgerError::AlreadyClaimed(reward_id.to_string()));
        }
        if !state.rewards[idx].unlocked {
            return Err(LedgerError::RewardNotFound(reward_id.to_string()));
        }

        let amount = state.rewards[idx].amount;
        let mut next = state.clone();
        next.rewards[idx].claimed = true;
        next.balance.primary = next
            .balance
            .primary
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        let mut tx = LedgerTransaction::new(TxKind::ClaimReward, amount);
        tx.to = Some(self.wallet_address.clone());
        tx.metadata = Some(json!({ "reward_id": reward_id }));
        next.transactions.push(tx.clone());

        self.persist(&next).await?;
        let balance = next.balance;
        *state = next;
        drop(state);

        info!(reward = reward_id, amount, "reward claimed");
        self.events
            .publish(LedgerEvent::RewardClaimed {
                reward_id: reward_id.to_string(),
                amount,
            })
            .await;
        self.events
            .publish(LedgerEvent::BalanceUpdated { balance })
            .await;
        self.events.publish(LedgerEvent::StateChanged).await;
        Ok(tx)
    }

    /// Contribute tokens to a charity.
    ///
    /// Requires a positive amount within the primary balance. Appends one
    /// contribution record and one `contribute` transaction.
    pub async fn contribute(
        &self,
        charity_id: &str,
        amount: Amount,
    ) -> LedgerResult<LedgerTransaction> {
        let mut state = self.state.lock().await;
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }
        if amount > state.balance.primary {
            return Err(LedgerError::InsufficientBalance {
                have: state.balance.primary,
                need: amount,
            });
        }

        let mut next = state.clone();
        next.balance.primary -= amount;
        next.contributions
            .push(ContributionRecord::new(charity_id, amount));

        let mut tx = LedgerTransaction::new(TxKind::Contribute, amount);
        tx.from = Some(self.wallet_address.clone());
        tx.to = Some(charity_id.to_string());
        next.transactions.push(tx.clone());

        self.persist(&next).await?;
        let balance = next.balance;
        *state = next;
        drop(state);

        info!(charity = charity_id, amount, "contribution made");
        self.events
            .publish(LedgerEvent::ContributionMade {
                charity_id: charity_id.to_string(),
                amount,
            })
            .await;
        self.events
            .publish(LedgerEvent::BalanceUpdated { balance })
            .await;
        self.events.publish(LedgerEvent::StateChanged).await;
        Ok(tx)
    }

    /// Unlock a reward that a milestone has been reached for.
    ///
    /// Returns false with no side effect if the reward is already unlocked
    /// or claimed.
    pub async fn unlock_reward(&self, reward_id: &str) -> LedgerResult<bool> {
        let mut state = self.state.lock().await;
        let idx = state
            .rewards
            .iter()
            .position(|r| r.id == reward_id)
            .ok_or_else(|| LedgerError::RewardNotFound(reward_id.to_string()))?;
        if state.rewards[idx].unlocked || state.rewards[idx].claimed {
            return Ok(false);
        }

        let mut next = state.clone();
        next.rewards[idx].unlocked = true;
        self.persist(&next).await?;
        *state = next;
        drop(state);

        info!(reward = reward_id, "reward unlocked");
        self.events.publish(LedgerEvent::StateChanged).await;
        Ok(true)
    }

    /// Send tokens to another address.
    pub async fn transfer(&self, to: &str, amount: Amount) -> LedgerResult<LedgerTransaction> {
        self.debit_op(TxKind::Transfer, amount, |tx, wallet| {
            tx.from = Some(wallet.to_string());
            tx.to = Some(to.to_string());
        })
        .await
    }

    /// Record tokens received from another address.
    pub async fn receive(&self, from: &str, amount: Amount) -> LedgerResult<LedgerTransaction> {
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }
        let mut state = self.state.lock().await;
        let mut next = state.clone();
        next.balance.primary = next
            .balance
            .primary
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        let mut tx = LedgerTransaction::new(TxKind::Receive, amount);
        tx.from = Some(from.to_string());
        tx.to = Some(self.wallet_address.clone());
        next.transactions.push(tx.clone());

        self.persist(&next).await?;
        let balance = next.balance;
        *state = next;
        drop(state);

        self.events
            .publish(LedgerEvent::BalanceUpdated { balance })
            .await;
        self.events.publish(LedgerEvent::StateChanged).await;
        Ok(tx)
    }

    /// Move tokens from the spendable balance into the staking bucket.
    pub async fn stake(&self, amount: Amount) -> LedgerResult<LedgerTransaction> {
        self.debit_op(TxKind::StakeTokens, amount, |tx, wallet| {
            tx.from = Some(wallet.to_string());
        })
        .await
    }

    /// Move tokens from the staking bucket back to the spendable balance.
    pub async fn unstake(&self, amount: Amount) -> LedgerResult<LedgerTransaction> {
        let mut state = self.state.lock().await;
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }
        if amount > state.staked {
            return Err(LedgerError::InsufficientBalance {
                have: state.staked,
                need: amount,
            });
        }

        let mut next = state.clone();
        next.staked -= amount;
        next.balance.primary = next
            .balance
            .primary
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        let mut tx = LedgerTransaction::new(TxKind::UnstakeTokens, amount);
        tx.to = Some(self.wallet_address.clone());
        next.transactions.push(tx.clone());

        self.persist(&next).await?;
        let balance = next.balance;
        *state = next;
        drop(state);

        self.events
            .publish(LedgerEvent::BalanceUpdated { balance })
            .await;
        self.events.publish(LedgerEvent::StateChanged).await;
        Ok(tx)
    }

    /// Credit the fixed bonus for one recorded daily check-in.
    pub async fn record_check_in(&self, day: u32) -> LedgerResult<LedgerTransaction> {
        let amount = seed::CHECK_IN_REWARD;
        let mut state = self.state.lock().await;
        let mut next = state.clone();
        next.balance.primary = next
            .balance
            .primary
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        let mut tx = LedgerTransaction::new(TxKind::CheckIn, amount);
        tx.to = Some(self.wallet_address.clone());
        tx.metadata = Some(json!({ "day": day }));
        next.transactions.push(tx.clone());

        self.persist(&next).await?;
        let balance = next.balance;
        *state = next;
        drop(state);

        debug!(day, amount, "check-in bonus credited");
        self.events
            .publish(LedgerEvent::BalanceUpdated { balance })
            .await;
        self.events.publish(LedgerEvent::StateChanged).await;
        Ok(tx)
    }

    /// Restore the default seed state in memory and in the store.
    pub async fn reset(&self) -> LedgerResult<()> {
        let mut state = self.state.lock().await;
        let next = seed::seed_state();
        self.persist(&next).await?;
        *state = next;
        drop(state);

        info!(wallet = %self.wallet_address, "ledger reset to defaults");
        self.events.publish(LedgerEvent::StateChanged).await;
        Ok(())
    }

    // ========================================================================
    // INTERNALS
    // ========================================================================

    /// Shared shape of the primary-balance debit operations.
    async fn debit_op(
        &self,
        kind: TxKind,
        amount: Amount,
        decorate: impl FnOnce(&mut LedgerTransaction, &str),
    ) -> LedgerResult<LedgerTransaction> {
        let mut state = self.state.lock().await;
        if amount == 0 {
            return Err(LedgerError::ZeroAmount);
        }
        if amount > state.balance.primary {
            return Err(LedgerError::InsufficientBalance {
                have: state.balance.primary,
                need: amount,
            });
        }

        let mut next = state.clone();
        next.balance.primary -= amount;
        if kind == TxKind::StakeTokens {
            next.staked = next.staked.checked_add(amount).ok_or(LedgerError::Overflow)?;
        }

        let mut tx = LedgerTransaction::new(kind, amount);
        decorate(&mut tx, &self.wallet_address);
        next.transactions.push(tx.clone());

        self.persist(&next).await?;
        let balance = next.balance;
        *state = next;
        drop(state);

        self.events
            .publish(LedgerEvent::BalanceUpdated { balance })
            .await;
        self.events.publish(LedgerEvent::StateChanged).await;
        Ok(tx)
    }

    async fn persist(&self, state: &LedgerState) -> LedgerResult<()> {
        let raw = serde_json::to_string(state).map_err(|e| LedgerError::Storage(e.to_string()))?;
        self.store
            .put(&keys::ledger_state(&self.wallet_address), &raw)
            .await?;
        Ok(())
    }
}
