use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Body of the liveness probe and of delete confirmations.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

/// A `200 {"message": ...}` response.
pub fn message(text: impl Into<String>) -> impl IntoResponse {
    Json(MessageResponse {
        message: text.into(),
    })
}

/// The uniform JSON error envelope: `{"error": {"code", "message"}}`.
pub fn error_body(code: &str, message: impl Into<String>, status: StatusCode) -> Response {
    let body = ErrorResponse {
        error: ErrorBody {
            code: code.to_string(),
            message: message.into(),
        },
    };

    (status, Json(body)).into_response()
}
