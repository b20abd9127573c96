use axum::extract::{Path, State};
use axum::Json;

use crate::repository::{EventFilter, EventRepository};
use crate::services::stats::{self, MonthlyStats, WeekView};
use crate::utils::error::AppError;

/// GET /api/v1/week/{year}/{week}: the 7-day window for a week number plus
/// every event inside it, ascending by date.
pub async fn week_view(
    State(repo): State<EventRepository>,
    Path((year, week)): Path<(i32, u32)>,
) -> Result<Json<WeekView>, AppError> {
    let (start_date, end_date) = stats::week_window(year, week)
        .ok_or_else(|| AppError::Validation(format!("invalid week {week} for year {year}")))?;

    let filter = EventFilter::default().starting(start_date).ending(end_date);
    let events = repo.list(&filter).await?;

    Ok(Json(WeekView {
        start_date,
        end_date,
        events,
    }))
}

/// GET /api/v1/stats/{year}/{month}: completion counts and average
/// productivity over one calendar month.
pub async fn monthly_stats(
    State(repo): State<EventRepository>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<MonthlyStats>, AppError> {
    let (start, end) = stats::month_window(year, month)
        .ok_or_else(|| AppError::Validation(format!("invalid month {month} for year {year}")))?;

    let events = repo.list_in_window(start, end).await?;

    Ok(Json(stats::summarize(&events)))
}
