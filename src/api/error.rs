//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::extraction::ExtractionError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Invalid document format: {0}")]
    InvalidFormat(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", detail.clone())
            }
            ApiError::InvalidFormat(detail) => (
                StatusCode::BAD_REQUEST,
                "INVALID_FORMAT",
                format!("Invalid document format: {detail}"),
            ),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };
        (status, Json(body)).into_response()
    }
}

impl From<ExtractionError> for ApiError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::MissingPages | ExtractionError::MissingWords { .. } => {
                ApiError::InvalidFormat(err.to_string())
            }
            // Candidate construction is guarded by the validators; if
            // one of these ever crosses the boundary it is a bug, not
            // a client mistake.
            ExtractionError::InvalidFirstName(_) | ExtractionError::InvalidFamilyName(_) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}
