//! Static network configuration table
//!
//! Immutable at runtime. The table is small, so chain-id lookup is a
//! linear scan.

use serde::Serialize;

/// Native currency descriptor for a network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NativeCurrency {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

/// Parameters of one supported network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NetworkConfig {
    /// Registry key
    pub name: &'static str,
    pub chain_id: u64,
    pub rpc_url: &'static str,
    pub block_explorer: &'static str,
    pub native_currency: NativeCurrency,
    pub is_testnet: bool,
}

const CELO: NativeCurrency = NativeCurrency {
    name: "Celo",
    symbol: "CELO",
    decimals: 18,
};

/// Every network the application knows about
pub const NETWORKS: &[NetworkConfig] = &[
    NetworkConfig {
        name: "celo",
        chain_id: 42_220,
        rpc_url: "https://forno.celo.org",
        block_explorer: "https://celoscan.io",
        native_currency: CELO,
        is_testnet: false,
    },
    NetworkConfig {
        name: "alfajores",
        chain_id: 44_787,
        rpc_url: "https://alfajores-forno.celo-testnet.org",
        block_explorer: "https://alfajores.celoscan.io",
        native_currency: CELO,
        is_testnet: true,
    },
    // Fully offline entry used when no real chain is reachable or wanted.
    NetworkConfig {
        name: "demo",
        chain_id: 1_337,
        rpc_url: "",
        block_explorer: "",
        native_currency: NativeCurrency {
            name: "Veg Token",
            symbol: "VEG",
            decimals: 18,
        },
        is_testnet: true,
    },
];

/// Look a network up by chain id
pub fn by_chain_id(chain_id: u64) -> Option<&'static NetworkConfig> {
    NETWORKS.iter().find(|n| n.chain_id == chain_id)
}

/// Look a network up by registry name
pub fn by_name(name: &str) -> Option<&'static NetworkConfig> {
    NETWORKS.iter().find(|n| n.name == name)
}

/// How the application session is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Production,
    Development,
    Demo,
}

impl AppMode {
    /// Parse a mode setting, treating anything unrecognized as demo
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "production" | "prod" | "mainnet" => AppMode::Production,
            "development" | "dev" | "testnet" => AppMode::Development,
            _ => AppMode::Demo,
        }
    }

    /// Whether this mode simulates the wallet instead of requiring one
    pub fn is_simulated(&self) -> bool {
        matches!(self, AppMode::Development | AppMode::Demo)
    }
}

/// Network a session starts on for a given mode setting.
///
/// Unrecognized modes land on the offline demo entry.
pub fn default_network(mode: &str) -> &'static NetworkConfig {
    let name = match AppMode::parse(mode) {
        AppMode::Production => "celo",
        AppMode::Development => "alfajores",
        AppMode::Demo => "demo",
    };
    // The names above are all present in NETWORKS; demo is the backstop.
    by_name(name).unwrap_or(&NETWORKS[2])
}
