//! Argument parsing for the veg21 binary

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// VEG21 challenge ledger CLI
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(name = "veg21")]
pub struct Veg21Cli {
    /// Directory holding the session document
    #[arg(short, long, default_value = ".veg21", env = "VEG21_DATA_DIR")]
    pub data_dir: PathBuf,

    /// Session mode (production, development, demo). Development and demo
    /// simulate the wallet; production requires a real provider.
    #[arg(short, long, default_value = "demo", env = "VEG21_MODE")]
    pub mode: String,

    #[command(subcommand)]
    pub command: Veg21Command,
}

/// veg21 commands
#[derive(Subcommand, Debug, Clone)]
pub enum Veg21Command {
    /// Pick the display name shown in the community feed
    Onboard {
        /// Display name
        username: String,
    },

    /// Show wallet, balances, and claimable rewards
    Status,

    /// List the full reward catalog
    Rewards,

    /// Claim an unlocked reward
    Claim {
        /// Reward id, e.g. first-steps
        reward_id: String,
    },

    /// Unlock a reward whose milestone was reached
    Unlock {
        /// Reward id, e.g. week-one
        reward_id: String,
    },

    /// Contribute tokens to a charity
    Contribute {
        /// Charity id, e.g. rescue-farm
        charity_id: String,
        /// Token amount
        amount: u64,
    },

    /// Record today's plant-based check-in
    CheckIn {
        /// Challenge day number (1-21)
        day: u32,
    },

    /// Send tokens to another address
    Transfer {
        /// Recipient address
        to: String,
        /// Token amount
        amount: u64,
    },

    /// Stake tokens
    Stake {
        /// Token amount
        amount: u64,
    },

    /// Unstake tokens
    Unstake {
        /// Token amount
        amount: u64,
    },

    /// Show the community activity feed
    Feed,

    /// Show the transaction history
    History,

    /// Network registry operations
    Networks(NetworkArgs),

    /// Reset the session to its seed state
    Reset,
}

/// Network registry commands
#[derive(Args, Debug, Clone)]
pub struct NetworkArgs {
    #[command(subcommand)]
    pub action: NetworkAction,
}

#[derive(Subcommand, Debug, Clone)]
pub enum NetworkAction {
    /// List every registered network
    List,
    /// Ask the wallet to switch to a chain id
    Switch {
        /// Target chain id, e.g. 44787
        chain_id: u64,
    },
}
