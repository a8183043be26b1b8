use std::sync::Arc;

use crate::{
    config::Config,
    models::Catalog,
    services::{
        BrowseService, InMemoryPreferenceStore, PreferenceStore, RecommendationService,
        SimulatedLatency, StoreLatency, WatchService,
    },
};

/// Shared application state
///
/// Built once at startup; every service is an owned instance handed to the
/// handlers by `Arc`, so there is no module-level state.
#[derive(Clone)]
pub struct AppState {
    pub recommendations: Arc<RecommendationService>,
    pub browse: BrowseService,
    pub watch: WatchService,
}

impl AppState {
    /// Wires the demo catalog and an in-memory watch log per `config`
    pub fn new(config: &Config) -> Self {
        let latency = StoreLatency {
            history: SimulatedLatency::from_millis(config.history_delay_ms),
            interests: SimulatedLatency::from_millis(config.interests_delay_ms),
        };
        let store = Arc::new(InMemoryPreferenceStore::new(config.history_capacity, latency));

        tracing::info!(
            capacity = store.capacity(),
            history_latency = ?latency.history.duration(),
            interests_latency = ?latency.interests.duration(),
            "Initialized in-memory watch log"
        );

        Self::with_store(config, store)
    }

    /// Same wiring over a caller-supplied store
    pub fn with_store(config: &Config, store: Arc<dyn PreferenceStore>) -> Self {
        let catalog = Arc::new(Catalog::demo());
        let recommendations = Arc::new(
            RecommendationService::from_seed(catalog, config.rng_seed).with_latency(
                SimulatedLatency::from_millis(config.lookup_delay_ms),
                SimulatedLatency::from_millis(config.recommend_delay_ms),
            ),
        );

        tracing::info!(
            videos = recommendations.catalog().len(),
            seeded = config.rng_seed.is_some(),
            "Loaded catalog"
        );

        Self {
            browse: BrowseService::new(Arc::clone(&recommendations)),
            watch: WatchService::new(store, Arc::clone(&recommendations), config.history_view_limit),
            recommendations,
        }
    }
}
