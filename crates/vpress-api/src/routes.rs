//! API routes.

use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{get_conversion_status, health, list_published_videos, ready, upload_video};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let video_routes = Router::new()
        .route("/upload", post(upload_video))
        .route("/status/:name", get(get_conversion_status))
        .route("/videos", get(list_published_videos));

    let health_routes = Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready));

    Router::new()
        .nest("/api/videos", video_routes)
        .merge(health_routes)
        // Axum's built-in 2 MB default would reject uploads long before the
        // gatekeeper sees them.
        .layer(DefaultBodyLimit::max(state.config.max_body_size))
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(cors_layer(&state.config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any).allow_methods(Any)
    } else {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
    }
}
