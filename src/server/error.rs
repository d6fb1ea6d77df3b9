//! Server Error Types
//!
//! Startup failures of the shell host and their HTTP rendering for the
//! health endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Shell host error types
#[derive(Error, Debug)]
pub enum ServerError {
    /// The compiled dashboard directory does not exist
    #[error("SPA directory not found: {0:?} (build arkinput-ui first)")]
    MissingDist(PathBuf),

    /// The dashboard directory has no index document
    #[error("SPA index document not found: {0:?}")]
    MissingIndex(PathBuf),

    /// Binding or serving failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ServerError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ServerError::MissingDist(_) => (StatusCode::SERVICE_UNAVAILABLE, "MISSING_DIST"),
            ServerError::MissingIndex(_) => (StatusCode::SERVICE_UNAVAILABLE, "MISSING_INDEX"),
            ServerError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        tracing::warn!(
            error_code = %code,
            error_message = %self,
            "Health check failed"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for shell host operations
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_index_is_unavailable() {
        let response = ServerError::MissingIndex(PathBuf::from("dist/index.html")).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_startup_failures_map_to_status() {
        let cases = [
            (ServerError::MissingDist(PathBuf::from("dist")), StatusCode::SERVICE_UNAVAILABLE),
            (ServerError::MissingIndex(PathBuf::from("dist/index.html")), StatusCode::SERVICE_UNAVAILABLE),
            (
                ServerError::Io(std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_messages_name_the_path() {
        let err = ServerError::MissingDist(PathBuf::from("arkinput-ui/dist"));
        assert!(err.to_string().contains("arkinput-ui/dist"));
    }
}
