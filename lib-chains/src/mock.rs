//! Scriptable in-process wallet provider
//!
//! Used by tests and by the offline demo session. Behavior toggles mirror
//! the failure modes of a real browser wallet: user rejection, a stuck
//! pending prompt, and chains the wallet has never seen.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::{broadcast, Mutex};
use tracing::debug;

use crate::networks::NetworkConfig;
use crate::provider::{ProviderError, ProviderNotification, ProviderResult, WalletProvider};

const NOTIFY_CAPACITY: usize = 16;

/// In-process [`WalletProvider`] with scriptable behavior
pub struct MockWalletProvider {
    accounts: Vec<String>,
    known_chains: Mutex<HashSet<u64>>,
    current_chain: Mutex<u64>,
    reject_requests: bool,
    request_pending: bool,
    notify: broadcast::Sender<ProviderNotification>,
}

impl MockWalletProvider {
    /// Provider holding one account on the given chain
    pub fn new(account: impl Into<String>, chain_id: u64) -> Self {
        let (notify, _) = broadcast::channel(NOTIFY_CAPACITY);
        Self {
            accounts: vec![account.into()],
            known_chains: Mutex::new(HashSet::from([chain_id])),
            current_chain: Mutex::new(chain_id),
            reject_requests: false,
            request_pending: false,
            notify,
        }
    }

    /// Mark an additional chain as already known to the wallet
    pub fn with_known_chain(mut self, chain_id: u64) -> Self {
        self.known_chains.get_mut().insert(chain_id);
        self
    }

    /// Make every prompt fail as user-rejected
    pub fn rejecting(mut self) -> Self {
        self.reject_requests = true;
        self
    }

    /// Make every prompt fail as already-pending
    pub fn busy(mut self) -> Self {
        self.request_pending = true;
        self
    }

    /// Chains the wallet currently knows
    pub async fn known_chains(&self) -> HashSet<u64> {
        self.known_chains.lock().await.clone()
    }

    fn prompt_gate(&self) -> ProviderResult<()> {
        if self.request_pending {
            return Err(ProviderError::RequestPending);
        }
        if self.reject_requests {
            return Err(ProviderError::Rejected);
        }
        Ok(())
    }
}

#[async_trait]
impl WalletProvider for MockWalletProvider {
    async fn accounts(&self) -> ProviderResult<Vec<String>> {
        Ok(self.accounts.clone())
    }

    async fn request_accounts(&self) -> ProviderResult<Vec<String>> {
        self.prompt_gate()?;
        let _ = self
            .notify
            .send(ProviderNotification::AccountsChanged(self.accounts.clone()));
        Ok(self.accounts.clone())
    }

    async fn chain_id(&self) -> ProviderResult<u64> {
        Ok(*self.current_chain.lock().await)
    }

    async fn switch_chain(&self, chain_id: u64) -> ProviderResult<()> {
        self.prompt_gate()?;
        if !self.known_chains.lock().await.contains(&chain_id) {
            return Err(ProviderError::UnrecognizedChain);
        }
        *self.current_chain.lock().await = chain_id;
        debug!(chain_id, "mock wallet switched chain");
        let _ = self.notify.send(ProviderNotification::ChainChanged(chain_id));
        Ok(())
    }

    async fn add_chain(&self, network: &NetworkConfig) -> ProviderResult<()> {
        self.prompt_gate()?;
        self.known_chains.lock().await.insert(network.chain_id);
        *self.current_chain.lock().await = network.chain_id;
        debug!(chain_id = network.chain_id, name = network.name, "mock wallet added chain");
        let _ = self
            .notify
            .send(ProviderNotification::ChainChanged(network.chain_id));
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<ProviderNotification> {
        self.notify.subscribe()
    }
}
