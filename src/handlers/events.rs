use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::{CalendarEvent, EventPayload};
use crate::repository::{EventFilter, EventRepository};
use crate::utils::error::AppError;
use crate::utils::response::message;

#[derive(Debug, Deserialize)]
pub struct ListEventsQuery {
    start_date: Option<String>,
    end_date: Option<String>,
    category: Option<String>,
}

/// GET /api/v1/events: list events, optionally bounded by date range and
/// filtered by exact category.
pub async fn list_events(
    State(repo): State<EventRepository>,
    Query(params): Query<ListEventsQuery>,
) -> Result<Json<Vec<CalendarEvent>>, AppError> {
    let mut filter = EventFilter::default();

    if let Some(raw) = params.start_date.as_deref() {
        filter = filter.starting(parse_date_param("start_date", raw)?);
    }
    if let Some(raw) = params.end_date.as_deref() {
        filter = filter.ending(parse_date_param("end_date", raw)?);
    }
    if let Some(category) = params.category {
        filter = filter.category(category);
    }

    Ok(Json(repo.list(&filter).await?))
}

/// POST /api/v1/events: create an event and return it with its assigned id
/// and timestamps.
pub async fn create_event(
    State(repo): State<EventRepository>,
    payload: Result<Json<EventPayload>, JsonRejection>,
) -> Result<Json<CalendarEvent>, AppError> {
    let Json(payload) = payload.map_err(invalid_body)?;
    Ok(Json(repo.create(&payload).await?))
}

/// GET /api/v1/events/{id}
pub async fn get_event(
    State(repo): State<EventRepository>,
    Path(id): Path<i64>,
) -> Result<Json<CalendarEvent>, AppError> {
    let event = repo.get(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(event))
}

/// PUT /api/v1/events/{id}: full replacement. The stored row takes every
/// payload field, including nulls for fields the caller omitted.
pub async fn update_event(
    State(repo): State<EventRepository>,
    Path(id): Path<i64>,
    payload: Result<Json<EventPayload>, JsonRejection>,
) -> Result<Json<CalendarEvent>, AppError> {
    let Json(payload) = payload.map_err(invalid_body)?;
    let event = repo.update(id, &payload).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(event))
}

/// DELETE /api/v1/events/{id}
pub async fn delete_event(
    State(repo): State<EventRepository>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !repo.delete(id).await? {
        return Err(not_found(id));
    }
    Ok(message("Event deleted successfully"))
}

fn parse_date_param(name: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AppError::Validation(format!("invalid {name} '{value}': expected YYYY-MM-DD"))
    })
}

fn invalid_body(rejection: JsonRejection) -> AppError {
    AppError::Validation(rejection.body_text())
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Event with id {id} was not found"))
}
