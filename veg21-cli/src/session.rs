//! Session wiring
//!
//! Everything the command handlers need, built once per invocation and
//! dropped on exit. The ledger is constructor-injected with the store; no
//! globals anywhere.

use std::sync::Arc;

use anyhow::Context;
use tracing::debug;

use lib_chains::{AppMode, MockWalletProvider, WalletConnector, DEMO_WALLET_ADDRESS};
use lib_feed::{ActivityFeed, InMemoryCheckInStore};
use lib_ledger::LedgerService;
use lib_storage::{JsonFileStore, KeyValueStore};
use lib_types::{now_millis, CheckIn};

use crate::cli::Veg21Cli;

const SESSION_FILE: &str = "session.json";

/// One wired CLI session
pub struct Session {
    pub mode: AppMode,
    pub store: Arc<dyn KeyValueStore>,
    pub connector: WalletConnector,
    pub ledger: Arc<LedgerService>,
    pub check_ins: Arc<InMemoryCheckInStore>,
}

impl Session {
    /// Open the session document, connect the wallet, and initialize the
    /// ledger.
    pub async fn open(args: &Veg21Cli) -> anyhow::Result<Self> {
        let mode = AppMode::parse(&args.mode);
        let store: Arc<dyn KeyValueStore> = Arc::new(
            JsonFileStore::open_lossy(args.data_dir.join(SESSION_FILE))
                .await
                .context("opening session store")?,
        );

        // Development gets a scriptable provider so wallet flows can be
        // exercised end to end; demo simulates with no provider at all.
        // Production expects a real provider, which a terminal session does
        // not have.
        let connector = match mode {
            AppMode::Development => {
                let network = lib_chains::default_network(&args.mode);
                WalletConnector::new(
                    Arc::new(MockWalletProvider::new(DEMO_WALLET_ADDRESS, network.chain_id)),
                    mode,
                )
            }
            _ => WalletConnector::without_provider(mode),
        };

        let address = connector
            .connect()
            .await
            .context("connecting wallet for this session")?;
        debug!(%address, ?mode, "session wallet connected");

        let ledger = Arc::new(
            LedgerService::initialize(store.clone(), address)
                .await
                .context("initializing ledger")?,
        );

        let check_ins = Arc::new(InMemoryCheckInStore::new());
        if mode == AppMode::Demo {
            seed_demo_check_ins(&check_ins).await;
        }

        Ok(Self {
            mode,
            store,
            connector,
            ledger,
            check_ins,
        })
    }

    /// Activity feed over this session's sources
    pub fn feed(&self) -> ActivityFeed {
        ActivityFeed::new(self.ledger.clone(), self.check_ins.clone(), self.store.clone())
    }
}

/// Sample community activity so a demo feed is not empty.
async fn seed_demo_check_ins(store: &InMemoryCheckInStore) {
    let base = now_millis().saturating_sub(6 * 60 * 60 * 1000);
    let fixtures = [
        ("maya", 12u32, vec!["tom", "lena"]),
        ("tom", 9, vec!["maya"]),
        ("lena", 15, vec![]),
    ];
    for (i, (user, day, liked_by)) in fixtures.into_iter().enumerate() {
        store
            .add(CheckIn {
                id: format!("demo-{user}-{day}"),
                user_id: user.to_string(),
                day,
                timestamp: base + (i as u64) * 60 * 60 * 1000,
                likes: liked_by.len() as u32,
                liked_by: liked_by.into_iter().map(str::to_string).collect(),
            })
            .await;
    }
}
