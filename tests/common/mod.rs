use serde_json::json;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use timeblock_server::models::EventPayload;

/// Fresh in-memory database with the schema applied. A single connection
/// keeps every statement on the same in-memory instance.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite should connect");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("migrations should apply");

    pool
}

/// Minimal valid payload; tweak fields on the returned value as needed.
#[allow(dead_code)]
pub fn payload(date: &str, title: &str) -> EventPayload {
    serde_json::from_value(json!({ "date": date, "title": title }))
        .expect("minimal payload should deserialize")
}
