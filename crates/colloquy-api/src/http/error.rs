//! Application error type mapping to HTTP status codes and the
//! `{"success": false, "error": ...}` envelope.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use colloquy_types::error::{ChatError, StoreError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// The request was rejected before anything was written.
    Validation(String),
    /// Persistence or other internal failure.
    Internal(String),
}

impl From<ChatError> for ApiError {
    fn from(e: ChatError) -> Self {
        match e {
            ChatError::EmptyMessage => ApiError::Validation("Message is required".to_string()),
            ChatError::Store(StoreError::EmptyContent) => {
                ApiError::Validation("Message is required".to_string())
            }
            ChatError::Store(err @ StoreError::Query(_)) => ApiError::Internal(err.to_string()),
        }
    }
}

/// Error envelope returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            error: message,
        });

        (status, body).into_response()
    }
}
