//! Network Registry and Wallet Adapter
//!
//! A static table of blockchain network parameters, a typed trait over the
//! external wallet provider's request surface, and the connection helpers
//! the application drives them with. The provider itself is an external
//! capability; this crate owns only the contract and the fallback logic
//! around it.

pub mod mock;
pub mod networks;
pub mod provider;
pub mod wallet;

pub use mock::MockWalletProvider;
pub use networks::{default_network, AppMode, NativeCurrency, NetworkConfig, NETWORKS};
pub use provider::{ProviderError, ProviderNotification, ProviderResult, WalletProvider};
pub use wallet::{WalletConnector, DEMO_WALLET_ADDRESS};
