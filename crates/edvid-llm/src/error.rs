//! Error types for provider clients.

use thiserror::Error;

/// Result type for provider operations.
pub type LlmResult<T> = Result<T, LlmError>;

/// Errors that can occur when talking to remote AI providers.
#[derive(Debug, Error)]
pub enum LlmError {
    /// The provider is unreachable, timed out, or returned a fatal status.
    /// Always terminal for the enclosing pipeline step.
    #[error("Upstream provider error: {0}")]
    Upstream(String),

    /// The provider answered, but the text is not extractable/parsable JSON
    /// of the expected shape.
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// Client misconfiguration (missing API key etc.).
    #[error("Provider configuration error: {0}")]
    Config(String),
}

impl LlmError {
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        Self::Upstream(e.to_string())
    }
}
