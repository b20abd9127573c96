use axum::http::{header, HeaderValue, Method};
use std::env;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// The companion UI's dev-server origin.
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";

const PREFLIGHT_MAX_AGE_SECS: u64 = 86400;

/// Cross-origin policy for the API. Origins come from the
/// `CORS_ALLOWED_ORIGINS` env var (comma-separated) so deployments are not
/// pinned to the development origin.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(PREFLIGHT_MAX_AGE_SECS))
}

fn allowed_origins() -> AllowOrigin {
    let configured =
        env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string());

    let mut origins = parse_origins(&configured);
    if origins.is_empty() {
        // A wildcard cannot be combined with credentials, so fall back to
        // the development origin rather than AllowOrigin::any().
        tracing::warn!(
            "CORS: no valid origin in '{}', falling back to {}",
            configured,
            DEFAULT_ALLOWED_ORIGINS
        );
        origins = parse_origins(DEFAULT_ALLOWED_ORIGINS);
    } else {
        tracing::info!("CORS: {} allowed origin(s)", origins.len());
    }

    AllowOrigin::list(origins)
}

fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("CORS: skipping invalid origin '{}': {}", origin, e);
                None
            }
        })
        .collect()
}
