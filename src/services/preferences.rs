use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::{
    error::AppResult,
    models::{InterestWeights, WatchEvent},
    services::latency::SimulatedLatency,
};

/// Weight of an event watched today; each full day since subtracts one
const FRESH_WEIGHT: i64 = 10;
/// Floor for old events, which never stop counting
const MIN_WEIGHT: i64 = 1;
const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Store of the user's watch log
///
/// The in-memory implementation never fails. The `AppResult` return leaves room
/// for a persistent backing that reports `AppError::StoreUnavailable`.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Prepends an event to the log, evicting the oldest entries over capacity
    async fn record(&self, event: WatchEvent) -> AppResult<()>;

    /// Snapshot of the log, most recent first
    async fn list(&self) -> AppResult<Vec<WatchEvent>>;

    /// Recency-decayed weight per category, as of now
    async fn interest_weights(&self) -> AppResult<InterestWeights>;
}

/// Latencies applied by [`InMemoryPreferenceStore`]
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreLatency {
    /// Applied to `record` and `list`
    pub history: SimulatedLatency,
    pub interests: SimulatedLatency,
}

/// Bounded, process-local watch log
#[derive(Debug)]
pub struct InMemoryPreferenceStore {
    log: RwLock<VecDeque<WatchEvent>>,
    capacity: usize,
    latency: StoreLatency,
}

impl InMemoryPreferenceStore {
    pub const DEFAULT_CAPACITY: usize = 50;

    pub fn new(capacity: usize, latency: StoreLatency) -> Self {
        Self {
            log: RwLock::new(VecDeque::with_capacity(capacity)),
            capacity,
            latency,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Interest weights against an explicit clock
    pub async fn interest_weights_at(&self, now: DateTime<Utc>) -> InterestWeights {
        let log = self.log.read().await;
        compute_interest_weights(log.iter(), now)
    }
}

impl Default for InMemoryPreferenceStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY, StoreLatency::default())
    }
}

#[async_trait::async_trait]
impl PreferenceStore for InMemoryPreferenceStore {
    async fn record(&self, event: WatchEvent) -> AppResult<()> {
        self.latency.history.wait().await;

        let mut log = self.log.write().await;
        log.push_front(event);
        log.truncate(self.capacity);

        tracing::debug!(
            history_len = log.len(),
            capacity = self.capacity,
            "Recorded watch event"
        );

        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<WatchEvent>> {
        self.latency.history.wait().await;

        let log = self.log.read().await;
        Ok(log.iter().cloned().collect())
    }

    async fn interest_weights(&self) -> AppResult<InterestWeights> {
        self.latency.interests.wait().await;
        Ok(self.interest_weights_at(Utc::now()).await)
    }
}

/// Whole days between `watched_at` and `now`, rounded down.
///
/// Timestamps in the future count as today.
pub fn days_since(watched_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - watched_at)
        .num_seconds()
        .div_euclid(SECONDS_PER_DAY)
        .max(0)
}

/// Contribution of one event: `max(1, 10 - days_since)`
pub fn event_weight(watched_at: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    (FRESH_WEIGHT - days_since(watched_at, now)).max(MIN_WEIGHT) as u64
}

/// Sums event weights per category
pub fn compute_interest_weights<'a>(
    events: impl IntoIterator<Item = &'a WatchEvent>,
    now: DateTime<Utc>,
) -> InterestWeights {
    let mut weights = InterestWeights::new();
    for event in events {
        *weights.entry(event.category).or_insert(0) += event_weight(event.watched_at, now);
    }
    weights
}
