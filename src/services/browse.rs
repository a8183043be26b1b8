use std::{num::NonZeroUsize, sync::Arc};

use crate::{
    models::{Category, Video},
    services::recommendations::RecommendationService,
};

/// Number of items the browse page pulls before filtering
pub const BROWSE_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(20) {
    Some(n) => n,
    None => unreachable!(),
};

/// Search and category filtering over the catalog
#[derive(Debug, Clone)]
pub struct BrowseService {
    recommendations: Arc<RecommendationService>,
}

impl BrowseService {
    pub fn new(recommendations: Arc<RecommendationService>) -> Self {
        Self { recommendations }
    }

    /// Shuffled catalog narrowed by a free-text query and a category.
    ///
    /// The query is matched case-insensitively against title, description and
    /// channel name; a blank query keeps everything.
    pub async fn browse(&self, query: Option<&str>, category: Option<Category>) -> Vec<Video> {
        let videos = self.recommendations.recommend(None, BROWSE_PAGE_SIZE).await;
        let query = query.map(str::trim).filter(|q| !q.is_empty());

        let results = filter_videos(videos, query, category);

        tracing::debug!(
            query = ?query,
            category = ?category,
            matched = results.len(),
            "Browse results"
        );

        results
    }
}

pub fn filter_videos(videos: Vec<Video>, query: Option<&str>, category: Option<Category>) -> Vec<Video> {
    videos
        .into_iter()
        .filter(|video| query.map_or(true, |q| video.matches_query(q)))
        .filter(|video| category.map_or(true, |c| video.category == c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Catalog;
    use std::collections::HashSet;

    fn browse_service() -> BrowseService {
        let catalog = Arc::new(Catalog::demo());
        BrowseService::new(Arc::new(RecommendationService::from_seed(catalog, Some(17))))
    }

    fn ids(videos: &[Video]) -> HashSet<&str> {
        videos.iter().map(|v| v.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_browse_without_filters_returns_whole_catalog() {
        let videos = browse_service().browse(None, None).await;
        assert_eq!(videos.len(), 8);
    }

    #[tokio::test]
    async fn test_blank_query_matches_everything() {
        let videos = browse_service().browse(Some("   "), None).await;
        assert_eq!(videos.len(), 8);
    }

    #[tokio::test]
    async fn test_query_is_case_insensitive() {
        let videos = browse_service().browse(Some("DESIGN"), None).await;
        assert_eq!(ids(&videos), HashSet::from(["4", "8"]));
    }

    #[tokio::test]
    async fn test_query_matches_channel_name() {
        let videos = browse_service().browse(Some("startupguru"), None).await;
        assert_eq!(ids(&videos), HashSet::from(["7"]));
    }

    #[tokio::test]
    async fn test_category_filter() {
        let videos = browse_service()
            .browse(None, Some(Category::Programming))
            .await;
        assert_eq!(ids(&videos), HashSet::from(["2", "5"]));
    }

    #[tokio::test]
    async fn test_query_and_category_combine() {
        let videos = browse_service()
            .browse(Some("learn"), Some(Category::Design))
            .await;
        // "Learn how to create..." is item 4; item 3 matches "learn" but is education
        assert_eq!(ids(&videos), HashSet::from(["4"]));
    }

    #[test]
    fn test_filter_videos_no_match() {
        let videos = Catalog::demo().videos().to_vec();
        assert!(filter_videos(videos, Some("cooking"), None).is_empty());
    }
}
