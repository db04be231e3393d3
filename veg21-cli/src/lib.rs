//! VEG21 CLI Library
//!
//! Wires one local challenge-ledger session: a JSON file store, a wallet
//! connection (simulated outside production), the ledger service, and the
//! derived views. Each invocation is one session; all state lives in the
//! session document under the data directory.

pub mod cli;
pub mod commands;
pub mod session;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub use cli::{NetworkAction, Veg21Cli, Veg21Command};
pub use session::Session;

/// Parse arguments, build the session, and dispatch the command.
pub async fn run_cli() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Veg21Cli::parse();
    let session = Session::open(&args).await?;

    match args.command {
        Veg21Command::Onboard { ref username } => {
            commands::ledger::handle_onboard(&session, username).await
        }
        Veg21Command::Status => commands::ledger::handle_status(&session).await,
        Veg21Command::Rewards => commands::ledger::handle_rewards(&session).await,
        Veg21Command::Claim { ref reward_id } => {
            commands::ledger::handle_claim(&session, reward_id).await
        }
        Veg21Command::Unlock { ref reward_id } => {
            commands::ledger::handle_unlock(&session, reward_id).await
        }
        Veg21Command::Contribute {
            ref charity_id,
            amount,
        } => commands::ledger::handle_contribute(&session, charity_id, amount).await,
        Veg21Command::CheckIn { day } => commands::ledger::handle_check_in(&session, day).await,
        Veg21Command::Transfer { ref to, amount } => {
            commands::ledger::handle_transfer(&session, to, amount).await
        }
        Veg21Command::Stake { amount } => commands::ledger::handle_stake(&session, amount).await,
        Veg21Command::Unstake { amount } => {
            commands::ledger::handle_unstake(&session, amount).await
        }
        Veg21Command::Feed => commands::views::handle_feed(&session).await,
        Veg21Command::History => commands::views::handle_history(&session).await,
        Veg21Command::Networks(ref network_args) => {
            commands::network::handle_networks(&session, &network_args.action).await
        }
        Veg21Command::Reset => commands::ledger::handle_reset(&session).await,
    }
}
