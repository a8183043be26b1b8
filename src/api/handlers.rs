use std::num::NonZeroUsize;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{Category, InterestWeights, Video, VideoId, WatchEvent},
};

use super::{
    extract::{ApiJson, ApiQuery},
    AppState,
};

/// Shelf size on the home page
const DEFAULT_RECOMMENDATION_LIMIT: usize = 8;
/// Sidebar size on the video page
const DEFAULT_RELATED_LIMIT: usize = 5;

// Request types

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub exclude: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct RelatedQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct BrowseQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordEventRequest {
    pub video_id: VideoId,
    pub category: Category,
    /// Defaults to the time the request is handled
    pub watched_at: Option<DateTime<Utc>>,
}

fn parse_limit(limit: Option<usize>, default: usize) -> AppResult<NonZeroUsize> {
    let limit = limit.unwrap_or(default);
    NonZeroUsize::new(limit)
        .ok_or_else(|| AppError::InvalidInput("limit must be a positive integer".to_string()))
}

fn parse_category(category: Option<&str>) -> AppResult<Option<Category>> {
    match category.map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(raw) => raw.parse::<Category>().map(Some).map_err(AppError::InvalidInput),
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Recommended shelf, optionally excluding one item
pub async fn recommendations(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<RecommendationQuery>,
) -> AppResult<Json<Vec<Video>>> {
    let limit = parse_limit(params.limit, DEFAULT_RECOMMENDATION_LIMIT)?;
    let exclude = params.exclude.map(VideoId::new);

    let videos = state.recommendations.recommend(exclude.as_ref(), limit).await;
    Ok(Json(videos))
}

/// Browse page: search and category tabs
pub async fn browse(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<BrowseQuery>,
) -> AppResult<Json<Vec<Video>>> {
    let category = parse_category(params.category.as_deref())?;
    let videos = state.browse.browse(params.q.as_deref(), category).await;
    Ok(Json(videos))
}

/// Video page: serves the item and logs the view
pub async fn get_video(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> AppResult<Json<Video>> {
    let id = VideoId::new(id);
    tracing::info!(request_id = %request_id, video_id = %id, "Opening video");

    let video = state.watch.record_view(&id).await?;
    Ok(Json(video))
}

/// Sidebar next to a playing video
pub async fn related_videos(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiQuery(params): ApiQuery<RelatedQuery>,
) -> AppResult<Json<Vec<Video>>> {
    let limit = parse_limit(params.limit, DEFAULT_RELATED_LIMIT)?;
    let id = VideoId::new(id);

    let videos = state.recommendations.recommend(Some(&id), limit).await;
    Ok(Json(videos))
}

/// Profile page: resolved watch history
pub async fn watch_history(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<Vec<Video>>> {
    let history = state.watch.history().await.map_err(|e| {
        tracing::error!(request_id = %request_id, error = %e, "Failed to load watch history");
        e
    })?;
    Ok(Json(history))
}

/// Per-category interest weights
pub async fn interests(State(state): State<AppState>) -> AppResult<Json<InterestWeights>> {
    let weights = state.watch.interests().await?;
    Ok(Json(weights))
}

/// Records a raw watch event
pub async fn record_event(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RecordEventRequest>,
) -> AppResult<StatusCode> {
    let event = WatchEvent::new(
        request.video_id,
        request.category,
        request.watched_at.unwrap_or_else(Utc::now),
    );
    state.watch.record(event).await?;
    Ok(StatusCode::CREATED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_limit_defaults() {
        assert_eq!(parse_limit(None, 8).unwrap().get(), 8);
        assert_eq!(parse_limit(Some(3), 8).unwrap().get(), 3);
        assert!(matches!(parse_limit(Some(0), 8), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category(None).unwrap(), None);
        assert_eq!(parse_category(Some("all")).unwrap(), None);
        assert_eq!(parse_category(Some("design")).unwrap(), Some(Category::Design));
        assert!(matches!(parse_category(Some("cooking")), Err(AppError::InvalidInput(_))));
    }
}
