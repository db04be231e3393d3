//! View reconciliation
//!
//! Both refresh triggers funnel into one idempotent [`FeedRefresher::refresh`]
//! call: a ledger-event subscription wakes the loop immediately, and a
//! fixed-interval timer backstops any missed or coalesced event. Each
//! refresh is a full recompute; overlapping triggers just recompute twice
//! and the last write wins.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::{Notify, RwLock};
use tracing::debug;

use lib_ledger::{LedgerEvent, LedgerEventListener};

use crate::activity::CommunityActivity;
use crate::feed::ActivityFeed;

/// Timer backstop between event-driven refreshes
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Read handle onto the latest rendered feed snapshot
#[derive(Clone)]
pub struct FeedHandle {
    snapshot: Arc<RwLock<Vec<CommunityActivity>>>,
}

impl FeedHandle {
    /// The most recently rendered rows
    pub async fn latest(&self) -> Vec<CommunityActivity> {
        self.snapshot.read().await.clone()
    }
}

/// Bus listener that wakes the refresh loop
pub struct RefreshListener {
    wakeup: Arc<Notify>,
}

#[async_trait]
impl LedgerEventListener for RefreshListener {
    async fn on_event(&mut self, event: LedgerEvent) -> Result<()> {
        if matches!(
            event,
            LedgerEvent::BalanceUpdated { .. } | LedgerEvent::StateChanged
        ) {
            self.wakeup.notify_one();
        }
        Ok(())
    }
}

/// Drives feed recomputation from events and the interval timer
pub struct FeedRefresher {
    feed: ActivityFeed,
    snapshot: Arc<RwLock<Vec<CommunityActivity>>>,
    wakeup: Arc<Notify>,
}

impl FeedRefresher {
    /// Wrap a feed in a refresher with an empty snapshot
    pub fn new(feed: ActivityFeed) -> Self {
        Self {
            feed,
            snapshot: Arc::new(RwLock::new(Vec::new())),
            wakeup: Arc::new(Notify::new()),
        }
    }

    /// Snapshot reader to hand to renderers
    pub fn handle(&self) -> FeedHandle {
        FeedHandle {
            snapshot: self.snapshot.clone(),
        }
    }

    /// Listener to subscribe on the ledger's event channel
    pub fn listener(&self) -> RefreshListener {
        RefreshListener {
            wakeup: self.wakeup.clone(),
        }
    }

    /// The single reconciliation entry point: recompute the feed from
    /// source data and replace the snapshot.
    pub async fn refresh(&self) {
        let rows = self.feed.build().await;
        debug!(rows = rows.len(), "feed recomputed");
        *self.snapshot.write().await = rows;
    }

    /// Run the refresh loop at the default cadence. Never returns; spawn it.
    pub async fn run(self) {
        self.run_with_interval(REFRESH_INTERVAL).await
    }

    /// Run the refresh loop with a custom timer period.
    ///
    /// The first tick fires immediately, which covers the initial render.
    pub async fn run_with_interval(self, period: Duration) {
        let mut ticker = tokio::time::interval(period);
        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = self.wakeup.notified() => {}
            }
            self.refresh().await;
        }
    }
}
