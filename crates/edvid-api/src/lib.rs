//! Axum HTTP API server.
//!
//! This crate provides:
//! - The `/api/generate-video` and `/api/generate-narration` endpoints
//! - Per-request pipeline orchestration and scratch-directory lifecycle
//! - Static serving of rendered artifacts
//! - CORS, request tracing and body-size limits

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
