//! Narrated-explainer endpoint.

use std::path::Path;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::services::run_narration_pipeline;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateNarrationRequest {
    /// Path to an already-rendered video on this host.
    pub video_path: String,
    /// Topic the narration should cover.
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateNarrationResponse {
    pub narration_file_path: String,
    pub final_video_path: String,
}

/// Generate a narrated version of an existing video: sample frames, script
/// a narration, synthesize and stitch the audio, and render the final cut.
pub async fn generate_narration(
    State(state): State<AppState>,
    Json(request): Json<GenerateNarrationRequest>,
) -> ApiResult<Json<GenerateNarrationResponse>> {
    let video_path = Path::new(&request.video_path);
    if !video_path.is_file() {
        return Err(ApiError::not_found(format!(
            "Video not found: {}",
            request.video_path
        )));
    }

    info!(
        "Narration request: video={}, prompt={:?}",
        request.video_path, request.prompt
    );

    let artifacts = run_narration_pipeline(&state, video_path, &request.prompt).await?;

    Ok(Json(GenerateNarrationResponse {
        narration_file_path: artifacts.narration_file_path,
        final_video_path: artifacts.final_video_path,
    }))
}
