//! API-layer errors and their mapping to HTTP responses.
//!
//! Every error leaving a handler is serialized as a JSON body with an
//! appropriate status code via the [`IntoResponse`] implementation.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use presence_core::error::AnalyzerError;
use serde_json::json;
use thiserror::Error;

/// Errors produced while answering an API request.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The presence core failed underneath the handler (file access,
    /// configuration).
    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),

    /// Handler infrastructure failure (e.g. a blocking task was cancelled).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        // Every current variant is a server-side fault: the log file is an
        // operator-managed resource, not request input.
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(%status, "request failed: {}", self);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_file_read_maps_to_internal_server_error() {
        let err = ApiError::from(AnalyzerError::FileRead {
            path: PathBuf::from("/srv/presence.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_display_preserves_source_message() {
        let err = ApiError::from(AnalyzerError::FileRead {
            path: PathBuf::from("/srv/presence.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        });
        let msg = err.to_string();
        assert!(msg.contains("/srv/presence.csv"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn test_internal_error_display() {
        let err = ApiError::Internal("loader task failed".to_string());
        assert_eq!(err.to_string(), "Internal error: loader task failed");
    }
}
