//! API router — mounts all dashboard endpoints under /api/v1.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{self, AppState};

/// Build the API router with all endpoints.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        // Clients
        .route("/api/v1/clients", get(handlers::list_clients).post(handlers::create_client))
        .route("/api/v1/clients/{id}", get(handlers::get_client))
        .route("/api/v1/clients/{id}/campaigns", get(handlers::list_client_campaigns))
        // Campaigns & rollout
        .route("/api/v1/campaigns", post(handlers::create_campaign))
        .route("/api/v1/campaigns/{id}", get(handlers::get_campaign))
        .route("/api/v1/campaigns/{id}/badge", get(handlers::campaign_badge))
        .route("/api/v1/campaigns/{id}/test/cancel", post(handlers::cancel_campaign_test))
        // Content generation
        .route("/api/v1/content/text", post(handlers::generate_text))
        .route("/api/v1/content/image", post(handlers::generate_image))
        .route("/api/v1/content/video", post(handlers::generate_video))
        // Trends
        .route("/api/v1/trends", get(handlers::list_trends))
        .route("/api/v1/trends/discover", post(handlers::discover_trends))
        .route("/api/v1/trends/analyze", post(handlers::analyze_trend))
        .with_state(state)
}
