//! Wallet-provider contract
//!
//! Typed surface over the browser wallet's JSON-RPC request interface.
//! Each trait method documents the underlying method name; the error enum
//! carries the provider error codes callers branch on.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::broadcast;

use crate::networks::NetworkConfig;

/// Error from the external wallet provider
#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    /// User declined the prompt (code 4001). Terminal for this action.
    #[error("User rejected the request")]
    Rejected,

    /// A request is already pending in the wallet (code -32002).
    #[error("A wallet request is already pending")]
    RequestPending,

    /// The wallet does not know this chain (code 4902); it must be added.
    #[error("Network not recognized by the wallet")]
    UnrecognizedChain,

    /// No provider is available in this environment.
    #[error("No wallet provider found")]
    ProviderNotFound,

    /// Anything else the provider reported.
    #[error("Provider error: {0}")]
    Other(String),
}

impl ProviderError {
    /// The wire error code, for the variants that carry one
    pub fn code(&self) -> Option<i64> {
        match self {
            ProviderError::Rejected => Some(4001),
            ProviderError::RequestPending => Some(-32002),
            ProviderError::UnrecognizedChain => Some(4902),
            ProviderError::ProviderNotFound | ProviderError::Other(_) => None,
        }
    }

    /// Map a raw provider error code onto the taxonomy
    pub fn from_code(code: i64, message: impl Into<String>) -> Self {
        match code {
            4001 => ProviderError::Rejected,
            -32002 => ProviderError::RequestPending,
            4902 => ProviderError::UnrecognizedChain,
            _ => ProviderError::Other(message.into()),
        }
    }
}

/// Result type for provider operations
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Push notifications a provider emits
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderNotification {
    /// `accountsChanged`
    AccountsChanged(Vec<String>),
    /// `chainChanged`
    ChainChanged(u64),
}

/// The external wallet capability
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// `eth_accounts`: accounts already authorized, no prompt.
    async fn accounts(&self) -> ProviderResult<Vec<String>>;

    /// `eth_requestAccounts`: prompt the user to connect.
    async fn request_accounts(&self) -> ProviderResult<Vec<String>>;

    /// `eth_chainId`: the chain the wallet is currently on.
    async fn chain_id(&self) -> ProviderResult<u64>;

    /// `wallet_switchEthereumChain`. Fails [`ProviderError::UnrecognizedChain`]
    /// when the wallet has never seen this chain.
    async fn switch_chain(&self, chain_id: u64) -> ProviderResult<()>;

    /// `wallet_addEthereumChain`: register a network with the wallet and
    /// switch to it.
    async fn add_chain(&self, network: &NetworkConfig) -> ProviderResult<()>;

    /// Subscribe to account-change and chain-change notifications.
    fn subscribe(&self) -> broadcast::Receiver<ProviderNotification>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ProviderError::Rejected.code(), Some(4001));
        assert_eq!(ProviderError::RequestPending.code(), Some(-32002));
        assert_eq!(ProviderError::UnrecognizedChain.code(), Some(4902));
        assert_eq!(ProviderError::ProviderNotFound.code(), None);
    }

    #[test]
    fn test_from_code_roundtrip() {
        assert!(matches!(
            ProviderError::from_code(4001, ""),
            ProviderError::Rejected
        ));
        assert!(matches!(
            ProviderError::from_code(4902, ""),
            ProviderError::UnrecognizedChain
        ));
        assert!(matches!(
            ProviderError::from_code(-32002, ""),
            ProviderError::RequestPending
        ));
        assert!(matches!(
            ProviderError::from_code(-32000, "boom"),
            ProviderError::Other(_)
        ));
    }
}
