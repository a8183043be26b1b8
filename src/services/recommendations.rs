use std::{num::NonZeroUsize, sync::Arc};

use rand::{rngs::StdRng, Rng, SeedableRng};
use tokio::sync::Mutex;

use crate::{
    models::{Catalog, Video, VideoId},
    services::latency::SimulatedLatency,
};

/// Picks catalog items to show next to, or instead of, the current item.
///
/// There is no ranking: the candidate pool is shuffled uniformly and cut to
/// the requested length. The random source is injected so tests can seed it.
#[derive(Debug)]
pub struct RecommendationService {
    catalog: Arc<Catalog>,
    rng: Mutex<StdRng>,
    lookup_latency: SimulatedLatency,
    recommend_latency: SimulatedLatency,
}

impl RecommendationService {
    pub fn new(catalog: Arc<Catalog>, rng: StdRng) -> Self {
        Self {
            catalog,
            rng: Mutex::new(rng),
            lookup_latency: SimulatedLatency::NONE,
            recommend_latency: SimulatedLatency::NONE,
        }
    }

    /// Seeded when `seed` is set, otherwise seeded from OS entropy
    pub fn from_seed(catalog: Arc<Catalog>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(catalog, rng)
    }

    pub fn with_latency(mut self, lookup: SimulatedLatency, recommend: SimulatedLatency) -> Self {
        self.lookup_latency = lookup;
        self.recommend_latency = recommend;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Up to `limit` catalog items in random order, never including `exclude_id`.
    ///
    /// Returns the whole shuffled pool when `limit` exceeds it.
    pub async fn recommend(&self, exclude_id: Option<&VideoId>, limit: NonZeroUsize) -> Vec<Video> {
        self.recommend_latency.wait().await;

        let mut pool: Vec<Video> = self
            .catalog
            .videos()
            .iter()
            .filter(|video| Some(&video.id) != exclude_id)
            .cloned()
            .collect();

        {
            let mut rng = self.rng.lock().await;
            fisher_yates_shuffle(&mut pool, &mut *rng);
        }
        pool.truncate(limit.get());

        tracing::debug!(
            exclude_id = ?exclude_id.map(VideoId::as_str),
            limit = limit.get(),
            returned = pool.len(),
            "Selected recommendations"
        );

        pool
    }

    pub async fn get_by_id(&self, id: &VideoId) -> Option<Video> {
        self.lookup_latency.wait().await;

        let video = self.catalog.get(id).cloned();
        if video.is_none() {
            tracing::debug!(video_id = %id, "Catalog lookup miss");
        }
        video
    }
}

/// In-place uniform permutation.
///
/// For each index from the last down to 1, swaps it with an index drawn
/// uniformly from `0..=i`.
pub fn fisher_yates_shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
