//! Error types for the HTTP API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quayside_core::CoreError;
use quayside_error::StoreError;
use thiserror::Error;

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors surfaced by the HTTP API.
///
/// The wrapped message text is what the caller receives; the variant only
/// drives the status code.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failure from the core or one of its collaborators.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Server error (listener setup, accept loop).
    #[error("Server error: {0}")]
    Server(String),
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Core(CoreError::InvalidProjectId(_)) => StatusCode::BAD_REQUEST,
            Self::Core(CoreError::Store(StoreError::NotFound(_))) => StatusCode::NOT_FOUND,
            Self::Core(CoreError::Store(StoreError::Unavailable(_))) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Self::Core(_) | Self::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "message": self.to_string()
        });

        (status, axum::Json(body)).into_response()
    }
}
