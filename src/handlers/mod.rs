use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::utils::response::message;

pub mod events;
pub mod stats;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

/// Liveness probe used by the companion UI and the smoke-test tooling.
pub async fn root() -> impl IntoResponse {
    message("Timeblock API is running!")
}

pub async fn health_check() -> impl IntoResponse {
    Json(HealthPayload {
        status: "ok",
        service: "timeblock-api",
    })
}
