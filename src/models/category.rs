use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Named tag with a display color. Schema-only: `CalendarEvent.category` is
/// free text and does not reference this table.
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// Hex color, e.g. "#3B82F6".
    pub color: Option<String>,
    pub description: Option<String>,

    pub created_at: NaiveDateTime,
}
