use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use timeblock_server::routes::create_routes;

mod common;

async fn test_app() -> Router {
    create_routes(common::test_pool().await)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request should not fail at the transport level");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    // Extractor rejections (e.g. a non-integer path segment) produce plain
    // text bodies; surface those as JSON strings so assertions stay uniform.
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn root_probe_responds() {
    let app = test_app().await;
    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Timeblock API is running!");
}

#[tokio::test]
async fn health_probe_responds() {
    let app = test_app().await;
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "timeblock-api");
}

#[tokio::test]
async fn event_lifecycle_create_fetch_update_delete() {
    let app = test_app().await;

    // Create.
    let (status, created) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/events",
            &json!({
                "date": "2024-03-04T00:00:00",
                "title": "Standup",
                "morning_9_10": "meeting"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_i64().expect("id should be assigned");
    assert_eq!(created["title"], "Standup");
    assert_eq!(created["morning_9_10"], "meeting");
    assert_eq!(created["morning_completed"], false);
    assert_eq!(created["productivity_score"], 0.0);
    assert!(created["created_at"].is_string());

    // Fetch returns the same values.
    let (status, fetched) = send(&app, get(&format!("/api/v1/events/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["date"], "2024-03-04T00:00:00");
    assert_eq!(fetched["title"], "Standup");
    assert_eq!(fetched["morning_9_10"], "meeting");

    // Full-replace update: null clears the slot, title survives because the
    // payload carries it.
    let (status, updated) = send(
        &app,
        json_request(
            "PUT",
            &format!("/api/v1/events/{id}"),
            &json!({
                "date": "2024-03-04T00:00:00",
                "title": "Standup",
                "morning_9_10": null
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Standup");
    assert!(updated["morning_9_10"].is_null());

    // Delete, then fetching is a 404.
    let (status, body) = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/v1/events/{id}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Event deleted successfully");

    let (status, body) = send(&app, get(&format!("/api/v1/events/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn update_can_set_completion_flags_and_score() {
    let app = test_app().await;

    let (_, created) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/events",
            &json!({ "date": "2024-03-04", "title": "Deep work" }),
        ),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        json_request(
            "PUT",
            &format!("/api/v1/events/{id}"),
            &json!({
                "date": "2024-03-04",
                "title": "Deep work",
                "morning_completed": true,
                "evening_completed": true,
                "productivity_score": 8.5
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["morning_completed"], true);
    assert_eq!(updated["afternoon_completed"], false);
    assert_eq!(updated["evening_completed"], true);
    assert_eq!(updated["productivity_score"], 8.5);
}

#[tokio::test]
async fn list_respects_date_range_and_category() {
    let app = test_app().await;

    for (date, title, category) in [
        ("2024-03-01", "first", "work"),
        ("2024-03-04", "second", "fitness"),
        ("2024-04-01", "outside", "work"),
    ] {
        let (status, _) = send(
            &app,
            json_request(
                "POST",
                "/api/v1/events",
                &json!({ "date": date, "title": title, "category": category }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(
        &app,
        get("/api/v1/events?start_date=2024-03-01&end_date=2024-03-31"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let events = body.as_array().expect("list endpoint returns an array");
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["title"], "first");
    assert_eq!(events[1]["title"], "second");

    let (status, body) = send(&app, get("/api/v1/events?category=work")).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["first", "outside"]);
}

#[tokio::test]
async fn malformed_dates_and_bodies_are_client_errors() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/api/v1/events?start_date=03-01-2024")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    // Missing required title.
    let (status, body) = send(
        &app,
        json_request("POST", "/api/v1/events", &json!({ "date": "2024-03-04" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    // Non-integer id in the path.
    let (status, _) = send(&app, get("/api/v1/events/not-a-number")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn week_view_returns_window_and_contained_events() {
    let app = test_app().await;

    for (date, title) in [
        ("2024-03-04", "monday"),
        ("2024-03-10", "sunday"),
        ("2024-03-11", "next week"),
    ] {
        send(
            &app,
            json_request(
                "POST",
                "/api/v1/events",
                &json!({ "date": date, "title": title }),
            ),
        )
        .await;
    }

    // Week 10 of 2024 runs 2024-03-04 .. 2024-03-10.
    let (status, body) = send(&app, get("/api/v1/week/2024/10")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["start_date"], "2024-03-04");
    assert_eq!(body["end_date"], "2024-03-10");
    let titles: Vec<&str> = body["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["monday", "sunday"]);
}

#[tokio::test]
async fn week_view_rejects_bad_parameters() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/api/v1/week/2024/54")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, _) = send(&app, get("/api/v1/week/2024/ten")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn monthly_stats_aggregate_completion_and_productivity() {
    let app = test_app().await;

    let march_events = [
        json!({
            "date": "2024-03-04",
            "title": "good day",
            "morning_completed": true,
            "afternoon_completed": true,
            "evening_completed": true,
            "productivity_score": 9.0
        }),
        json!({
            "date": "2024-03-05",
            "title": "slow day",
            "morning_completed": true,
            "productivity_score": 3.0
        }),
        json!({ "date": "2024-04-02", "title": "april, out of window" }),
    ];
    for event in &march_events {
        send(&app, json_request("POST", "/api/v1/events", event)).await;
    }

    let (status, body) = send(&app, get("/api/v1/stats/2024/3")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_events"], 2);
    assert_eq!(body["completed_sessions"]["morning"], 2);
    assert_eq!(body["completed_sessions"]["afternoon"], 1);
    assert_eq!(body["completed_sessions"]["evening"], 1);
    assert_eq!(body["average_productivity"], 6.0);
}

#[tokio::test]
async fn monthly_stats_on_empty_window_are_zero() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/api/v1/stats/2024/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_events"], 0);
    assert_eq!(body["completed_sessions"]["morning"], 0);
    assert_eq!(body["average_productivity"], 0.0);
}

#[tokio::test]
async fn monthly_stats_reject_invalid_month() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/api/v1/stats/2024/13")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}
