//! Video generation endpoint.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::{info, warn};

use edvid_llm::generate_main_content;
use edvid_models::VideoId;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateVideoResponse {
    /// Public URL of the uploaded video (generated or placeholder).
    pub video_url: String,
    /// Public URL of the main-content JSON, when generation succeeded.
    pub main_content_url: Option<String>,
}

/// Generate an educational video from uploaded documents and a prompt.
///
/// Multipart fields: `prompt` (text) and one or more `files`. Main-content
/// generation is best-effort; video upload failure is terminal.
pub async fn generate_video(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<GenerateVideoResponse>> {
    let scratch = tempfile::tempdir()
        .map_err(|e| ApiError::internal(format!("scratch dir: {}", e)))?;

    let mut prompt: Option<String> = None;
    let mut documents: Vec<String> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("invalid multipart body: {}", e)))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("prompt") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("invalid prompt field: {}", e)))?;
                prompt = Some(text);
            }
            Some("files") => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("invalid file field: {}", e)))?;

                let path = scratch
                    .path()
                    .join(format!("upload_{:02}", documents.len()));
                tokio::fs::write(&path, &data)
                    .await
                    .map_err(|e| ApiError::internal(format!("saving upload: {}", e)))?;

                documents.push(String::from_utf8_lossy(&data).into_owned());
            }
            _ => {}
        }
    }

    let prompt = prompt
        .filter(|p| !p.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("missing prompt field"))?;
    if documents.is_empty() {
        return Err(ApiError::bad_request("at least one file is required"));
    }

    info!(
        "Generate-video request: prompt={:?}, files={}",
        prompt,
        documents.len()
    );

    let video_id = VideoId::new();
    let context = state.retriever.retrieve(&prompt, &documents).await?;

    // Main content is best-effort; the video is still produced without it
    let main_content_url = match generate_main_content(&state.chat, &context).await {
        Ok(content) => match serde_json::to_vec_pretty(&content) {
            Ok(json) => {
                let key = format!("content/{}.json", video_id);
                match state
                    .storage
                    .upload_bytes(json, &key, "application/json")
                    .await
                {
                    Ok(url) => Some(url),
                    Err(e) => {
                        warn!("Main content upload failed: {}", e);
                        None
                    }
                }
            }
            Err(e) => {
                warn!("Main content serialization failed: {}", e);
                None
            }
        },
        Err(e) => {
            warn!("Main content generation failed: {}", e);
            None
        }
    };

    // Any generation or download failure falls back to the placeholder video
    let local_video = scratch.path().join("generated.mp4");
    let generated = match state.videogen.generate(&prompt).await {
        Ok(url) => state.videogen.download(&url, &local_video).await,
        Err(e) => Err(e),
    };

    if let Err(e) = generated {
        warn!("Video generation failed, using placeholder: {}", e);
        state
            .videogen
            .download(&state.config.placeholder_video_url, &local_video)
            .await?;
    }

    let key = format!("generated/{}.mp4", video_id);
    let video_url = state
        .storage
        .upload_file(&local_video, &key, "video/mp4")
        .await?;

    info!("Generate-video complete: {}", video_url);

    Ok(Json(GenerateVideoResponse {
        video_url,
        main_content_url,
    }))
}
