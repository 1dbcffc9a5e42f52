//! API configuration.

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Max request body size (uploads are multipart)
    pub max_body_size: usize,
    /// Environment (development/production)
    pub environment: String,
    /// Directory rendered artifacts are written to and served from
    pub artifacts_dir: String,
    /// Seconds of video between sampled narration frames
    pub frame_interval_secs: f64,
    /// Placeholder video used when generation fails
    pub placeholder_video_url: String,
    /// Chat provider API key
    pub openai_api_key: String,
    /// TTS provider API key
    pub elevenlabs_api_key: String,
    /// Video-generation provider API key
    pub videogen_api_key: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: vec!["*".to_string()],
            max_body_size: 50 * 1024 * 1024, // 50MB, uploads are documents + videos
            environment: "development".to_string(),
            artifacts_dir: "videos".to_string(),
            frame_interval_secs: 10.0,
            placeholder_video_url: DEFAULT_PLACEHOLDER_URL.to_string(),
            openai_api_key: String::new(),
            elevenlabs_api_key: String::new(),
            videogen_api_key: String::new(),
        }
    }
}

const DEFAULT_PLACEHOLDER_URL: &str =
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8000),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(|_| vec!["*".to_string()]),
            max_body_size: std::env::var("MAX_BODY_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(50 * 1024 * 1024),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
            artifacts_dir: std::env::var("ARTIFACTS_DIR").unwrap_or_else(|_| "videos".to_string()),
            frame_interval_secs: std::env::var("FRAME_INTERVAL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10.0),
            placeholder_video_url: std::env::var("PLACEHOLDER_VIDEO_URL")
                .unwrap_or_else(|_| DEFAULT_PLACEHOLDER_URL.to_string()),
            openai_api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            elevenlabs_api_key: std::env::var("ELEVENLABS_API_KEY").unwrap_or_default(),
            videogen_api_key: std::env::var("VIDEOGEN_API_KEY").unwrap_or_default(),
        }
    }

    /// Check if running in production mode.
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.frame_interval_secs, 10.0);
        assert!(!config.is_production());
    }

    #[test]
    fn test_production_flag_case_insensitive() {
        let config = ApiConfig {
            environment: "Production".to_string(),
            ..ApiConfig::default()
        };
        assert!(config.is_production());
    }
}
