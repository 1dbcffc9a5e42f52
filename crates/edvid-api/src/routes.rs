//! API routes.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers::{generate_narration, generate_video, health, root};
use crate::middleware::cors_layer;
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/generate-video", post(generate_video))
        .route("/generate-narration", post(generate_narration));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/api", api_routes)
        // Rendered artifacts are served straight from disk
        .nest_service("/videos", ServeDir::new(&state.config.artifacts_dir))
        .layer(DefaultBodyLimit::max(state.config.max_body_size))
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
