use chrono::{NaiveDateTime, NaiveTime, Utc};
use sqlx::QueryBuilder;

use crate::models::{CalendarEvent, EventPayload};
use crate::repository::{EventFilter, EventRepository};

/// Payload columns in insert/update order. `created_at`/`updated_at` are
/// appended separately since only inserts write `created_at`.
const PAYLOAD_COLUMNS: &str = "date, title, category, \
    morning_7_8, morning_8_9, morning_9_10, morning_10_11, morning_11_12, \
    afternoon_12_13, afternoon_13_14, afternoon_14_15, afternoon_15_16, \
    afternoon_16_17, afternoon_17_18, \
    evening_18_19, evening_19_20, evening_20_21, evening_21_22, \
    evening_22_23, evening_23_24, \
    morning_completed, afternoon_completed, evening_completed, \
    productivity_score, notes";

const PAYLOAD_PLACEHOLDERS: &str = "?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, \
    ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?";

const UPDATE_ASSIGNMENTS: &str = "date = ?, title = ?, category = ?, \
    morning_7_8 = ?, morning_8_9 = ?, morning_9_10 = ?, morning_10_11 = ?, \
    morning_11_12 = ?, \
    afternoon_12_13 = ?, afternoon_13_14 = ?, afternoon_14_15 = ?, \
    afternoon_15_16 = ?, afternoon_16_17 = ?, afternoon_17_18 = ?, \
    evening_18_19 = ?, evening_19_20 = ?, evening_20_21 = ?, \
    evening_21_22 = ?, evening_22_23 = ?, evening_23_24 = ?, \
    morning_completed = ?, afternoon_completed = ?, evening_completed = ?, \
    productivity_score = ?, notes = ?";

/// Bind every payload field in `PAYLOAD_COLUMNS` order. Shared between
/// insert and update so the two statements cannot drift apart.
macro_rules! bind_payload {
    ($query:expr, $payload:expr) => {
        $query
            .bind($payload.date)
            .bind(&$payload.title)
            .bind(&$payload.category)
            .bind(&$payload.morning_7_8)
            .bind(&$payload.morning_8_9)
            .bind(&$payload.morning_9_10)
            .bind(&$payload.morning_10_11)
            .bind(&$payload.morning_11_12)
            .bind(&$payload.afternoon_12_13)
            .bind(&$payload.afternoon_13_14)
            .bind(&$payload.afternoon_14_15)
            .bind(&$payload.afternoon_15_16)
            .bind(&$payload.afternoon_16_17)
            .bind(&$payload.afternoon_17_18)
            .bind(&$payload.evening_18_19)
            .bind(&$payload.evening_19_20)
            .bind(&$payload.evening_20_21)
            .bind(&$payload.evening_21_22)
            .bind(&$payload.evening_22_23)
            .bind(&$payload.evening_23_24)
            .bind($payload.morning_completed)
            .bind($payload.afternoon_completed)
            .bind($payload.evening_completed)
            .bind($payload.productivity_score)
            .bind(&$payload.notes)
    };
}

impl EventRepository {
    /// List events matching the filter, ordered ascending by date.
    ///
    /// The result set is unbounded: no pagination exists upstream, so none is
    /// applied here.
    pub async fn list(&self, filter: &EventFilter) -> Result<Vec<CalendarEvent>, sqlx::Error> {
        let mut query = QueryBuilder::new("SELECT * FROM calendar_events WHERE 1 = 1");

        if let Some(start) = filter.start_date {
            query.push(" AND date >= ");
            query.push_bind(start.and_time(NaiveTime::MIN));
        }
        if let Some(end) = filter.end_date {
            query.push(" AND date <= ");
            query.push_bind(end.and_time(NaiveTime::MIN));
        }
        if let Some(category) = &filter.category {
            query.push(" AND category = ");
            query.push_bind(category);
        }

        query.push(" ORDER BY date ASC");

        query
            .build_query_as::<CalendarEvent>()
            .fetch_all(self.pool())
            .await
    }

    /// List events in the half-open window `[start, end)`. Used by the
    /// monthly aggregation, where the upper bound is the first instant of the
    /// next month.
    pub async fn list_in_window(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<CalendarEvent>, sqlx::Error> {
        sqlx::query_as::<_, CalendarEvent>(
            "SELECT * FROM calendar_events WHERE date >= ? AND date < ?",
        )
        .bind(start)
        .bind(end)
        .fetch_all(self.pool())
        .await
    }

    /// Insert a new event, assigning its id and both timestamps.
    pub async fn create(&self, payload: &EventPayload) -> Result<CalendarEvent, sqlx::Error> {
        let now = Utc::now().naive_utc();
        let sql = format!(
            "INSERT INTO calendar_events ({PAYLOAD_COLUMNS}, created_at, updated_at) \
             VALUES ({PAYLOAD_PLACEHOLDERS}, ?, ?) RETURNING *"
        );

        bind_payload!(sqlx::query_as::<_, CalendarEvent>(&sql), payload)
            .bind(now)
            .bind(now)
            .fetch_one(self.pool())
            .await
    }

    /// Fetch a single event by id.
    pub async fn get(&self, id: i64) -> Result<Option<CalendarEvent>, sqlx::Error> {
        sqlx::query_as::<_, CalendarEvent>("SELECT * FROM calendar_events WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await
    }

    /// Full-replace update: every payload column is overwritten, nulls
    /// included, and `updated_at` is refreshed. `created_at` is untouched.
    /// Returns `None` when the id does not exist.
    pub async fn update(
        &self,
        id: i64,
        payload: &EventPayload,
    ) -> Result<Option<CalendarEvent>, sqlx::Error> {
        let now = Utc::now().naive_utc();
        let sql = format!(
            "UPDATE calendar_events SET {UPDATE_ASSIGNMENTS}, updated_at = ? \
             WHERE id = ? RETURNING *"
        );

        bind_payload!(sqlx::query_as::<_, CalendarEvent>(&sql), payload)
            .bind(now)
            .bind(id)
            .fetch_optional(self.pool())
            .await
    }

    /// Delete an event by id. Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM calendar_events WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
