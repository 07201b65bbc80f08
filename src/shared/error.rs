//! Application Error Types
//!
//! Centralized error handling with Axum integration. Errors are rendered in
//! the amis envelope so the front end can show `msg` directly.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Error response body.
///
/// `status` is non-zero for every error; amis treats any non-zero value as a
/// failure and displays `msg`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub msg: String,
}

impl AppError {
    /// HTTP status and amis error code for this error.
    pub fn status_and_code(&self) -> (StatusCode, u16) {
        match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, 10001),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, 10002),
            AppError::ServiceUnavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, 10008),
            AppError::Internal(_) | AppError::Database(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, 10000)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let msg = match self {
            AppError::NotFound(msg)
            | AppError::BadRequest(msg)
            | AppError::ServiceUnavailable(msg) => msg,
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".into()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                "Error fetching data".into()
            }
        };

        (status, Json(ErrorResponse { status: code, msg })).into_response()
    }
}
