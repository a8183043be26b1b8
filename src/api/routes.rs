use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Home shelf
        .route("/recommendations", get(handlers::recommendations))
        // Browse and video pages
        .route("/videos", get(handlers::browse))
        .route("/videos/:id", get(handlers::get_video))
        .route("/videos/:id/recommendations", get(handlers::related_videos))
        // Profile
        .route("/profile/history", get(handlers::watch_history))
        .route("/profile/interests", get(handlers::interests))
        .route("/history", post(handlers::record_event))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
}
