use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Standalone to-do item. The table exists for schema parity with the
/// calendar store; no endpoint operates on it yet.
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    /// "low", "medium" or "high".
    pub priority: String,
    /// "pending", "in_progress" or "completed".
    pub status: String,

    pub due_date: Option<NaiveDateTime>,
    pub estimated_hours: Option<f64>,
    pub actual_hours: Option<f64>,

    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
