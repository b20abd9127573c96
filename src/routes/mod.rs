use axum::routing::get;
use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use crate::config::{apply_security_headers, create_cors_layer};
use crate::handlers::{self, events, stats};
use crate::repository::EventRepository;

/// Assemble the full application router: the versioned API, the liveness
/// probes, and the middleware stack.
pub fn create_routes(pool: SqlitePool) -> Router {
    let api = Router::new()
        .route(
            "/events",
            get(events::list_events).post(events::create_event),
        )
        .route(
            "/events/:id",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        .route("/week/:year/:week", get(stats::week_view))
        .route("/stats/:year/:month", get(stats::monthly_stats));

    let router = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api);

    apply_security_headers(router)
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .with_state(EventRepository::new(pool))
}
