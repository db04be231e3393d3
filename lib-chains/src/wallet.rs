//! Wallet connection helpers
//!
//! Thin orchestration over the provider contract: connect a session and
//! switch networks with the add-network fallback. Provider rejections are
//! terminal for the action that triggered them; nothing here retries.

use std::sync::Arc;

use tracing::{info, warn};

use crate::networks::{self, AppMode};
use crate::provider::{ProviderError, ProviderResult, WalletProvider};

/// Fixed address handed out when the session simulates its wallet
pub const DEMO_WALLET_ADDRESS: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

/// Session-scoped wallet connection state
pub struct WalletConnector {
    provider: Option<Arc<dyn WalletProvider>>,
    mode: AppMode,
}

impl WalletConnector {
    /// Connector over a real (or mock) provider
    pub fn new(provider: Arc<dyn WalletProvider>, mode: AppMode) -> Self {
        Self {
            provider: Some(provider),
            mode,
        }
    }

    /// Connector for an environment with no provider injected
    pub fn without_provider(mode: AppMode) -> Self {
        Self {
            provider: None,
            mode,
        }
    }

    /// Whether a provider is available
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Connect the session and return the active wallet address.
    ///
    /// With no provider available this fails in production mode and falls
    /// back to the fixed simulated address in development and demo modes.
    /// Rejection and pending errors propagate untouched.
    pub async fn connect(&self) -> ProviderResult<String> {
        let provider = match &self.provider {
            Some(provider) => provider,
            None if self.mode.is_simulated() => {
                info!(address = DEMO_WALLET_ADDRESS, "no provider, using simulated wallet");
                return Ok(DEMO_WALLET_ADDRESS.to_string());
            }
            None => return Err(ProviderError::ProviderNotFound),
        };

        let accounts = provider.request_accounts().await?;
        accounts
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Other("provider returned no accounts".to_string()))
    }

    /// Ask the wallet to switch networks, adding the network first when the
    /// wallet does not recognize it.
    ///
    /// Returns whether the wallet ended up on the requested chain. The
    /// expected not-added path never surfaces as an error; only a failing
    /// add-network fallback (or any other provider error) does.
    pub async fn switch_network(&self, chain_id: u64) -> ProviderResult<bool> {
        let provider = match &self.provider {
            Some(provider) => provider,
            None => return Ok(false),
        };

        match provider.switch_chain(chain_id).await {
            Ok(()) => Ok(true),
            Err(ProviderError::UnrecognizedChain) => {
                let network = networks::by_chain_id(chain_id)
                    .ok_or(ProviderError::UnrecognizedChain)?;
                warn!(chain_id, name = network.name, "wallet missing network, adding it");
                provider.add_chain(network).await?;
                Ok(true)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockWalletProvider;

    #[tokio::test]
    async fn test_connect_returns_first_account() {
        let provider = Arc::new(MockWalletProvider::new("0xabc", 42_220));
        let connector = WalletConnector::new(provider, AppMode::Production);
        assert_eq!(connector.connect().await.unwrap(), "0xabc");
    }

    #[tokio::test]
    async fn test_connect_without_provider_in_production_fails() {
        let connector = WalletConnector::without_provider(AppMode::Production);
        assert!(matches!(
            connector.connect().await,
            Err(ProviderError::ProviderNotFound)
        ));
    }

    #[tokio::test]
    async fn test_connect_without_provider_in_development_simulates() {
        let connector = WalletConnector::without_provider(AppMode::Development);
        assert_eq!(connector.connect().await.unwrap(), DEMO_WALLET_ADDRESS);
    }

    #[tokio::test]
    async fn test_connect_rejection_is_terminal() {
        let provider = Arc::new(MockWalletProvider::new("0xabc", 42_220).rejecting());
        let connector = WalletConnector::new(provider, AppMode::Production);
        assert!(matches!(
            connector.connect().await,
            Err(ProviderError::Rejected)
        ));
    }

    #[tokio::test]
    async fn test_switch_known_chain() {
        let provider = Arc::new(MockWalletProvider::new("0xabc", 42_220).with_known_chain(44_787));
        let connector = WalletConnector::new(provider, AppMode::Production);
        assert!(connector.switch_network(44_787).await.unwrap());
    }

    #[tokio::test]
    async fn test_switch_falls_back_to_add_network() {
        let provider = Arc::new(MockWalletProvider::new("0xabc", 42_220));
        let connector = WalletConnector::new(provider.clone(), AppMode::Production);

        assert!(connector.switch_network(44_787).await.unwrap());
        assert!(provider.known_chains().await.contains(&44_787));
        assert_eq!(provider.chain_id().await.unwrap(), 44_787);
    }

    #[tokio::test]
    async fn test_switch_to_unregistered_chain_surfaces_error() {
        let provider = Arc::new(MockWalletProvider::new("0xabc", 42_220));
        let connector = WalletConnector::new(provider, AppMode::Production);
        // Chain id 999 is in no registry entry, so the add fallback cannot run.
        assert!(matches!(
            connector.switch_network(999).await,
            Err(ProviderError::UnrecognizedChain)
        ));
    }

    #[tokio::test]
    async fn test_switch_without_provider_is_false_not_error() {
        let connector = WalletConnector::without_provider(AppMode::Demo);
        assert!(!connector.switch_network(42_220).await.unwrap());
    }
}
