//! Text-to-speech client.
//!
//! Synthesis errors here are provider-fatal (auth/account/transport) and
//! abort the whole stitching step. A well-formed but empty payload is NOT
//! an error; the caller decides whether to skip the line.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::debug;

use crate::error::{LlmError, LlmResult};

const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";
/// Fixed narration voice.
pub const VOICE_ID: &str = "JBFqnCBsd6RMkjVDRZzb";
/// Fixed TTS model.
pub const MODEL_ID: &str = "eleven_multilingual_v2";
/// Raw PCM, 24 kHz mono 16-bit, matching the stitcher's expectations.
const OUTPUT_FORMAT: &str = "pcm_24000";

/// Seam between the stitcher and the TTS provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize speech for `text`. Returns the raw audio payload, which
    /// may be empty or malformed; only provider-fatal conditions are errors.
    async fn synthesize(&self, text: &str) -> LlmResult<Bytes>;
}

/// ElevenLabs TTS API client.
pub struct ElevenLabsClient {
    api_key: String,
    base_url: String,
    client: Client,
}

impl ElevenLabsClient {
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
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsClient {
    async fn synthesize(&self, text: &str) -> LlmResult<Bytes> {
        let url = format!(
            "{}/v1/text-to-speech/{}?output_format={}",
            self.base_url, VOICE_ID, OUTPUT_FORMAT
        );
        debug!("TTS request: {} chars", text.len());

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .json(&serde_json::json!({
                "text": text,
                "model_id": MODEL_ID,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::upstream(format!(
                "TTS provider returned {}: {}",
                status, body
            )));
        }

        // Streamed chunks are joined before use
        Ok(response.bytes().await?)
    }
}
