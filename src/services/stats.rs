//! Derived read-only views: week windows and monthly completion statistics.
//!
//! Both are pure computations over repository snapshots; the handlers fetch
//! the rows and delegate here.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::models::CalendarEvent;

/// A week window plus every event falling inside it.
#[derive(Debug, Serialize)]
pub struct WeekView {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub events: Vec<CalendarEvent>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct CompletedSessions {
    pub morning: usize,
    pub afternoon: usize,
    pub evening: usize,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct MonthlyStats {
    pub total_events: usize,
    pub completed_sessions: CompletedSessions,
    pub average_productivity: f64,
}

/// Compute the Monday-start 7-day window for a `(year, week)` pair under the
/// `%W` week-numbering convention: week 1 begins at the first Monday of the
/// year, and week 0 covers the days before it (its Monday lies in the
/// previous year unless January 1 is itself a Monday).
///
/// Returns `None` for week numbers above 53 or years outside the supported
/// calendar range. Year-boundary quirks of this convention are intentional.
pub fn week_window(year: i32, week: u32) -> Option<(NaiveDate, NaiveDate)> {
    if week > 53 {
        return None;
    }

    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let weekday_offset = i64::from(jan1.weekday().num_days_from_monday());

    let start = if week == 0 {
        // Monday of the week containing January 1.
        jan1 - Duration::days(weekday_offset)
    } else {
        let days_until_first_monday = (7 - weekday_offset) % 7;
        jan1 + Duration::days(days_until_first_monday + 7 * (i64::from(week) - 1))
    };

    Some((start, start + Duration::days(6)))
}

/// Half-open month window `[first-of-month, first-of-next-month)`, with
/// December rolling into January of the following year. `None` when the
/// month is outside 1..=12.
pub fn month_window(year: i32, month: u32) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };

    Some((start.and_time(NaiveTime::MIN), end.and_time(NaiveTime::MIN)))
}

/// Aggregate completion counts and mean productivity over a set of events.
///
/// The three segment counts are independent: a fully completed day
/// contributes to all of them. An empty slice yields zeroes rather than a
/// division by zero.
pub fn summarize(events: &[CalendarEvent]) -> MonthlyStats {
    let total_events = events.len();

    let completed_sessions = CompletedSessions {
        morning: events.iter().filter(|e| e.morning_completed).count(),
        afternoon: events.iter().filter(|e| e.afternoon_completed).count(),
        evening: events.iter().filter(|e| e.evening_completed).count(),
    };

    let average_productivity = if total_events == 0 {
        0.0
    } else {
        let sum: f64 = events.iter().map(|e| e.productivity_score).sum();
        sum / total_events as f64
    };

    MonthlyStats {
        total_events,
        completed_sessions,
        average_productivity,
    }
}
