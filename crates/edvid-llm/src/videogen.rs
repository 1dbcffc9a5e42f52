//! Video-generation provider client.
//!
//! The provider takes a prompt and an API key and answers with either a
//! success payload carrying a downloadable video URL or a failure payload
//! with an error message. Callers fall back to a static placeholder video
//! on ANY failure: network, non-200 status, `success:false`, or a missing
//! URL field.

use std::path::Path;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{LlmError, LlmResult};

const DEFAULT_BASE_URL: &str = "https://api.kodisc.com";

/// Video-generation API client.
pub struct VideoGenClient {
    api_key: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    success: bool,
    video: Option<String>,
    error: Option<String>,
}

impl VideoGenClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    /// Override the API base URL (used in tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Request a generated video; returns the CDN URL of the result.
    pub async fn generate(&self, prompt: &str) -> LlmResult<String> {
        let url = format!("{}/generate/video", self.base_url);
        debug!("Video generation request: {} chars of prompt", prompt.len());

        let form = [("apiKey", self.api_key.as_str()), ("prompt", prompt)];
        let response = self.client.post(&url).form(&form).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::upstream(format!(
                "video generation returned {}: {}",
                status, body
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| LlmError::malformed(format!("video generation response: {}", e)))?;

        if !parsed.success {
            return Err(LlmError::upstream(format!(
                "video generation failed: {}",
                parsed.error.as_deref().unwrap_or("unknown error from server")
            )));
        }

        let video_url = parsed
            .video
            .ok_or_else(|| LlmError::malformed("no video URL returned from server"))?;

        info!("Video generated: {}", video_url);
        Ok(video_url)
    }

    /// Download a video URL to a local file.
    pub async fn download(&self, url: &str, dest: impl AsRef<Path>) -> LlmResult<()> {
        let dest = dest.as_ref();
        debug!("Downloading video to {}", dest.display());

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(LlmError::upstream(format!(
                "video download returned {}",
                response.status()
            )));
        }

        let bytes = response.bytes().await?;
        tokio::fs::write(dest, &bytes)
            .await
            .map_err(|e| LlmError::upstream(format!("failed to write video: {}", e)))?;

        Ok(())
    }
}
