use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::utils::response::error_body;

/// Application error taxonomy. Every handler failure flows through here so
/// that status codes and response bodies stay uniform across endpoints.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed input: bad date strings, unparseable integers, invalid
    /// request bodies. Rejected before any storage access.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A referenced id does not exist.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Underlying persistence failure. Logged in full, surfaced to the
    /// client without internals.
    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Database(_) => "DATABASE_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Client errors are expected traffic; only storage failures are
        // logged at error level.
        let public_message = match &self {
            AppError::Validation(msg) | AppError::NotFound(msg) => {
                warn!(code = self.code(), message = %msg, "Request rejected");
                msg.clone()
            }
            AppError::Database(e) => {
                error!(error = ?e, "Database error");
                "A database error occurred".to_string()
            }
        };

        error_body(self.code(), public_message, self.status_code())
    }
}
