use chrono::NaiveDate;
use sqlx::SqlitePool;

pub mod events;

/// Repository for calendar events, backed by sqlx and SQLite.
///
/// The underlying pool is cheap to clone, so the repository can be handed to
/// every handler as router state.
#[derive(Clone)]
pub struct EventRepository {
    pool: SqlitePool,
}

impl EventRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Query parameters used when listing events.
///
/// `start_date` and `end_date` are inclusive bounds compared against the
/// event's `date` column at midnight; `category` is an exact match.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub category: Option<String>,
}

impl EventFilter {
    pub fn starting(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn ending(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}
