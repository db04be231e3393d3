//! Ledger Event Channel
//!
//! Typed in-process notifications for ledger state changes. View consumers
//! subscribe a listener, react to events, and deregister on teardown; the
//! channel is scoped to the owning [`crate::LedgerService`]'s lifetime.
//!
//! Delivery is best-effort and in subscription order. There is no replay: a
//! listener registered after an event fired never sees it, so consumers do
//! a full-state read on startup and treat events as incremental hints.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use lib_types::Amount;

use crate::types::TokenBalance;

// ============================================================================
// EVENT TYPES
// ============================================================================

/// Ledger-level events that consumers can subscribe to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum LedgerEvent {
    /// Any persisted ledger state changed
    StateChanged,

    /// A balance-affecting operation settled
    BalanceUpdated { balance: TokenBalance },

    /// A reward was claimed
    RewardClaimed { reward_id: String, amount: Amount },

    /// A charity contribution was made
    ContributionMade { charity_id: String, amount: Amount },
}

impl std::fmt::Display for LedgerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerEvent::StateChanged => write!(f, "StateChanged"),
            LedgerEvent::BalanceUpdated { balance } => {
                write!(f, "BalanceUpdated(primary={})", balance.primary)
            }
            LedgerEvent::RewardClaimed { reward_id, .. } => {
                write!(f, "RewardClaimed({reward_id})")
            }
            LedgerEvent::ContributionMade { charity_id, .. } => {
                write!(f, "ContributionMade({charity_id})")
            }
        }
    }
}

// ============================================================================
// LISTENER TRAIT
// ============================================================================

/// Trait for entities that listen to ledger events
#[async_trait]
pub trait LedgerEventListener: Send {
    /// Called for every published event
    async fn on_event(&mut self, event: LedgerEvent) -> Result<()>;
}

/// Handle returned by subscribe; pass back to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

// ============================================================================
// PUBLISHER
// ============================================================================

/// Thread-safe publisher for ledger events
#[derive(Clone, Default)]
pub struct EventPublisher {
    listeners: Arc<Mutex<Vec<(SubscriptionId, Box<dyn LedgerEventListener>)>>>,
    next_id: Arc<AtomicU64>,
}

impl std::fmt::Debug for EventPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventPublisher").finish()
    }
}

impl EventPublisher {
    /// Create a publisher with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a listener; keep the id to deregister later
    pub async fn subscribe(&self, listener: Box<dyn LedgerEventListener>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().await.push((id, listener));
        id
    }

    /// Remove a listener. Returns false if the id was already gone.
    pub async fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock().await;
        let before = listeners.len();
        listeners.retain(|(sub_id, _)| *sub_id != id);
        listeners.len() != before
    }

    /// Publish an event to all subscribers in subscription order
    ///
    /// A listener error is logged and does not stop delivery to the rest.
    pub async fn publish(&self, event: LedgerEvent) {
        let mut listeners = self.listeners.lock().await;
        for (id, listener) in listeners.iter_mut() {
            if let Err(e) = listener.on_event(event.clone()).await {
                tracing::warn!(subscription = id.0, error = %e, "event listener error");
            }
        }
    }

    /// Number of subscribed listeners
    pub async fn listener_count(&self) -> usize {
        self.listeners.lock().await.len()
    }
}

// ============================================================================
// RECORDING LISTENER
// ============================================================================

/// Listener that captures events for assertions in tests
#[derive(Debug, Clone, Default)]
pub struct RecordingListener {
    events: Arc<Mutex<Vec<LedgerEvent>>>,
}

impl RecordingListener {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Get captured events
    pub async fn events(&self) -> Vec<LedgerEvent> {
        self.events.lock().await.clone()
    }

    /// Clear captured events
    pub async fn clear(&self) {
        self.events.lock().await.clear();
    }
}

#[async_trait]
impl LedgerEventListener for RecordingListener {
    async fn on_event(&mut self, event: LedgerEvent) -> Result<()> {
        self.events.lock().await.push(event);
        Ok(())
    }
}

// ============================================================================
// UNIT TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publisher_starts_empty() {
        let publisher = EventPublisher::new();
        assert_eq!(publisher.listener_count().await, 0);
    }

    #[tokio::test]
    async fn test_subscribe_and_publish() {
        let publisher = EventPublisher::new();
        let recorder = RecordingListener::new();
        publisher.subscribe(Box::new(recorder.clone())).await;

        publisher.publish(LedgerEvent::StateChanged).await;

        let events = recorder.events().await;
        assert_eq!(events, vec![LedgerEvent::StateChanged]);
    }

    #[tokio::test]
    async fn test_multiple_listeners_receive_events() {
        let publisher = EventPublisher::new();
        let first = RecordingListener::new();
        let second = RecordingListener::new();
        publisher.subscribe(Box::new(first.clone())).await;
        publisher.subscribe(Box::new(second.clone())).await;

        let event = LedgerEvent::RewardClaimed {
            reward_id: "first-steps".to_string(),
            amount: 10,
        };
        publisher.publish(event.clone()).await;

        assert_eq!(first.events().await, vec![event.clone()]);
        assert_eq!(second.events().await, vec![event]);
    }

    #[tokio::test]
    async fn test_unsubscribe_stops_delivery() {
        let publisher = EventPublisher::new();
        let recorder = RecordingListener::new();
        let id = publisher.subscribe(Box::new(recorder.clone())).await;

        assert!(publisher.unsubscribe(id).await);
        assert!(!publisher.unsubscribe(id).await);

        publisher.publish(LedgerEvent::StateChanged).await;
        assert!(recorder.events().await.is_empty());
        assert_eq!(publisher.listener_count().await, 0);
    }

    #[tokio::test]
    async fn test_no_replay_for_late_subscribers() {
        let publisher = EventPublisher::new();
        publisher.publish(LedgerEvent::StateChanged).await;

        let late = RecordingListener::new();
        publisher.subscribe(Box::new(late.clone())).await;
        assert!(late.events().await.is_empty());
    }

    #[tokio::test]
    async fn test_failing_listener_does_not_block_others() {
        struct Failing;

        #[async_trait]
        impl LedgerEventListener for Failing {
            async fn on_event(&mut self, _event: LedgerEvent) -> Result<()> {
                anyhow::bail!("listener exploded")
            }
        }

        let publisher = EventPublisher::new();
        publisher.subscribe(Box::new(Failing)).await;
        let recorder = RecordingListener::new();
        publisher.subscribe(Box::new(recorder.clone())).await;

        publisher.publish(LedgerEvent::StateChanged).await;
        assert_eq!(recorder.events().await.len(), 1);
    }
}
