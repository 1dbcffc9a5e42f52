//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use edvid_llm::LlmError;
use edvid_media::MediaError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A remote provider was unreachable or rejected the request.
    #[error("Upstream provider error: {0}")]
    Upstream(String),

    /// A remote provider answered with something we could not parse.
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// Local media rendering (ffmpeg) failed.
    #[error("Render error: {0}")]
    Render(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Storage error: {0}")]
    Storage(#[from] edvid_storage::StorageError),
}

impl ApiError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) | ApiError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            ApiError::Render(_) | ApiError::Internal(_) | ApiError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<MediaError> for ApiError {
    fn from(e: MediaError) -> Self {
        match e {
            MediaError::FileNotFound(path) => {
                ApiError::NotFound(format!("File not found: {}", path.display()))
            }
            MediaError::InvalidInterval(_) => ApiError::BadRequest(e.to_string()),
            e if e.is_resource_error() => ApiError::BadRequest(e.to_string()),
            MediaError::FfmpegFailed { .. } | MediaError::Timeout(_) => {
                ApiError::Render(e.to_string())
            }
            e => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<LlmError> for ApiError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::Upstream(msg) => ApiError::Upstream(msg),
            LlmError::MalformedResponse(msg) => ApiError::MalformedResponse(msg),
            LlmError::Config(msg) => ApiError::Internal(msg),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Don't expose internal error details in production
        let detail = match &self {
            ApiError::Render(_) | ApiError::Internal(_) | ApiError::Storage(_) => {
                if std::env::var("ENVIRONMENT").unwrap_or_default() == "production" {
                    "An internal error occurred".to_string()
                } else {
                    self.to_string()
                }
            }
            _ => self.to_string(),
        };

        let body = ErrorResponse { detail };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_file_maps_to_404() {
        let err: ApiError = MediaError::FileNotFound(PathBuf::from("/x.mp4")).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_render_failure_maps_to_500() {
        let err: ApiError =
            MediaError::ffmpeg_failed("encode failed", Some("stderr".to_string()), Some(1)).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_provider_errors_map_to_502() {
        let upstream: ApiError = LlmError::upstream("timeout").into();
        assert_eq!(upstream.status_code(), StatusCode::BAD_GATEWAY);

        let malformed: ApiError = LlmError::malformed("no JSON object").into();
        assert_eq!(malformed.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_invalid_interval_maps_to_400() {
        let err: ApiError = MediaError::InvalidInterval(0.0).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
