//! Network registry command handlers

use anyhow::Result;

use lib_chains::{NetworkConfig, NETWORKS};

use crate::cli::NetworkAction;
use crate::session::Session;

/// Format one registry line
pub fn format_network_line(network: &NetworkConfig) -> String {
    let flavor = if network.is_testnet { "testnet" } else { "mainnet" };
    let rpc = if network.rpc_url.is_empty() {
        "(offline)"
    } else {
        network.rpc_url
    };
    format!(
        "{:12} chain {:>6}  [{}]  {}",
        network.name, network.chain_id, flavor, rpc
    )
}

/// Dispatch a networks subcommand
pub async fn handle_networks(session: &Session, action: &NetworkAction) -> Result<()> {
    match action {
        NetworkAction::List => {
            println!("🌐 Registered networks\n");
            for network in NETWORKS {
                println!("  {}", format_network_line(network));
            }
            Ok(())
        }
        NetworkAction::Switch { chain_id } => {
            if session.connector.switch_network(*chain_id).await? {
                println!("🌐 Wallet is now on chain {chain_id}");
            } else {
                println!("🌐 No wallet provider in this session, nothing to switch");
            }
            Ok(())
        }
    }
}
