use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{InterestWeights, Video, VideoId, WatchEvent},
    services::{preferences::PreferenceStore, recommendations::RecommendationService},
};

/// Ties catalog lookups to the watch log: recording views and resolving the
/// log back into catalog items for the profile page.
#[derive(Clone)]
pub struct WatchService {
    store: Arc<dyn PreferenceStore>,
    recommendations: Arc<RecommendationService>,
    history_limit: usize,
}

impl WatchService {
    pub const DEFAULT_HISTORY_LIMIT: usize = 12;

    pub fn new(
        store: Arc<dyn PreferenceStore>,
        recommendations: Arc<RecommendationService>,
        history_limit: usize,
    ) -> Self {
        Self {
            store,
            recommendations,
            history_limit,
        }
    }

    /// Looks up `id` and records a watch event for it, stamped now.
    ///
    /// A failed write is logged and does not stop the video from being served.
    pub async fn record_view(&self, id: &VideoId) -> AppResult<Video> {
        let video = self
            .recommendations
            .get_by_id(id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("video {}", id)))?;

        match self.store.record(WatchEvent::now(&video)).await {
            Ok(()) => tracing::info!(
                video_id = %video.id,
                category = %video.category,
                "Recorded view"
            ),
            Err(e) => tracing::error!(
                video_id = %video.id,
                error = %e,
                "Failed to record view"
            ),
        }

        Ok(video)
    }

    /// Most recently watched items, resolved in parallel.
    ///
    /// Ids that no longer resolve are skipped; at most `history_limit` items
    /// are returned. Repeat views of the same item appear once per view.
    pub async fn history(&self) -> AppResult<Vec<Video>> {
        let events = self.store.list().await?;

        let mut tasks = Vec::with_capacity(events.len());
        for event in events {
            let recommendations = Arc::clone(&self.recommendations);
            tasks.push(tokio::spawn(async move {
                recommendations.get_by_id(&event.video_id).await
            }));
        }

        let mut videos = Vec::new();
        let mut misses = 0usize;
        for task in tasks {
            match task.await {
                Ok(Some(video)) => videos.push(video),
                Ok(None) => misses += 1,
                Err(e) => {
                    tracing::error!(error = %e, "History lookup task failed");
                    misses += 1;
                }
            }
        }

        if misses > 0 {
            tracing::warn!(
                resolved = videos.len(),
                skipped = misses,
                "Some history entries could not be resolved"
            );
        }

        videos.truncate(self.history_limit);
        Ok(videos)
    }

    pub async fn record(&self, event: WatchEvent) -> AppResult<()> {
        self.store.record(event).await
    }

    pub async fn interests(&self) -> AppResult<InterestWeights> {
        self.store.interest_weights().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Catalog, Category};
    use crate::services::preferences::{InMemoryPreferenceStore, MockPreferenceStore};
    use chrono::Utc;
    use tokio_test::assert_err;

    fn recommendations() -> Arc<RecommendationService> {
        Arc::new(RecommendationService::from_seed(
            Arc::new(Catalog::demo()),
            Some(1),
        ))
    }

    fn in_memory_service() -> (WatchService, Arc<InMemoryPreferenceStore>) {
        let store = Arc::new(InMemoryPreferenceStore::default());
        let service = WatchService::new(
            store.clone(),
            recommendations(),
            WatchService::DEFAULT_HISTORY_LIMIT,
        );
        (service, store)
    }

    fn event(id: &str) -> WatchEvent {
        WatchEvent::new(VideoId::new(id), Category::Technology, Utc::now())
    }

    #[tokio::test]
    async fn test_record_view_stamps_category() {
        let (service, store) = in_memory_service();

        let video = service.record_view(&VideoId::new("7")).await.unwrap();
        assert_eq!(video.category, Category::Business);

        let log = store.list().await.unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].video_id.as_str(), "7");
        assert_eq!(log[0].category, Category::Business);
    }

    #[tokio::test]
    async fn test_record_view_unknown_video() {
        let (service, store) = in_memory_service();

        let result = service.record_view(&VideoId::new("404")).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_history_resolves_in_recency_order() {
        let (service, _store) = in_memory_service();
        for id in ["1", "4", "2"] {
            service.record_view(&VideoId::new(id)).await.unwrap();
        }

        let history = service.history().await.unwrap();
        let ids: Vec<&str> = history.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4", "1"]);
    }

    #[tokio::test]
    async fn test_history_skips_unknown_ids() {
        let (service, _store) = in_memory_service();
        service.record(event("3")).await.unwrap();
        service.record(event("gone")).await.unwrap();
        service.record(event("6")).await.unwrap();

        let history = service.history().await.unwrap();
        let ids: Vec<&str> = history.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["6", "3"]);
    }

    #[tokio::test]
    async fn test_history_is_capped() {
        let (service, _store) = in_memory_service();
        for _ in 0..20 {
            service.record(event("1")).await.unwrap();
        }

        assert_eq!(service.history().await.unwrap().len(), 12);
    }

    #[tokio::test]
    async fn test_history_propagates_store_failure() {
        let mut store = MockPreferenceStore::new();
        store
            .expect_list()
            .times(1)
            .returning(|| Err(AppError::StoreUnavailable("offline".to_string())));

        let service = WatchService::new(Arc::new(store), recommendations(), 12);
        let error = assert_err!(service.history().await);
        assert!(matches!(error, AppError::StoreUnavailable(_)));
    }

    #[tokio::test]
    async fn test_record_view_survives_store_failure() {
        let mut store = MockPreferenceStore::new();
        store
            .expect_record()
            .withf(|event| event.video_id.as_str() == "2" && event.category == Category::Programming)
            .times(1)
            .returning(|_| Err(AppError::StoreUnavailable("offline".to_string())));

        let service = WatchService::new(Arc::new(store), recommendations(), 12);
        let video = service.record_view(&VideoId::new("2")).await.unwrap();
        assert_eq!(video.id.as_str(), "2");
    }

    #[tokio::test]
    async fn test_interests_delegates_to_store() {
        let mut store = MockPreferenceStore::new();
        store.expect_interest_weights().times(1).returning(|| {
            Ok(InterestWeights::from([(Category::Design, 12)]))
        });

        let service = WatchService::new(Arc::new(store), recommendations(), 12);
        let weights = service.interests().await.unwrap();
        assert_eq!(weights.get(&Category::Design), Some(&12));
    }
}
