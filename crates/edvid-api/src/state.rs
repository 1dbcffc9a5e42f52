//! Application state.

use std::sync::Arc;

use anyhow::Context;

use edvid_llm::{ChatClient, ConcatRetriever, ContextRetriever, ElevenLabsClient, SpeechSynthesizer, VideoGenClient};
use edvid_storage::BlobClient;

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub storage: Arc<BlobClient>,
    pub chat: Arc<ChatClient>,
    pub tts: Arc<dyn SpeechSynthesizer>,
    pub videogen: Arc<VideoGenClient>,
    pub retriever: Arc<dyn ContextRetriever>,
}

impl AppState {
    /// Create new application state.
    pub async fn new(config: ApiConfig) -> anyhow::Result<Self> {
        if config.openai_api_key.is_empty() {
            anyhow::bail!("OPENAI_API_KEY not set");
        }
        if config.elevenlabs_api_key.is_empty() {
            anyhow::bail!("ELEVENLABS_API_KEY not set");
        }

        let storage = BlobClient::from_env().context("storage configuration")?;

        tokio::fs::create_dir_all(&config.artifacts_dir)
            .await
            .context("creating artifacts directory")?;

        Ok(Self {
            chat: Arc::new(ChatClient::new(&config.openai_api_key)),
            tts: Arc::new(ElevenLabsClient::new(&config.elevenlabs_api_key)),
            videogen: Arc::new(VideoGenClient::new(&config.videogen_api_key)),
            retriever: Arc::new(ConcatRetriever),
            storage: Arc::new(storage),
            config,
        })
    }
}
