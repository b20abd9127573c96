use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// A scheduled day: one row per date, with free-text hourly slots covering
/// 7:00-24:00 and one completion flag per segment (morning/afternoon/evening).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CalendarEvent {
    pub id: i64,
    pub date: NaiveDateTime,
    pub title: String,
    pub category: Option<String>,

    pub morning_7_8: Option<String>,
    pub morning_8_9: Option<String>,
    pub morning_9_10: Option<String>,
    pub morning_10_11: Option<String>,
    pub morning_11_12: Option<String>,

    pub afternoon_12_13: Option<String>,
    pub afternoon_13_14: Option<String>,
    pub afternoon_14_15: Option<String>,
    pub afternoon_15_16: Option<String>,
    pub afternoon_16_17: Option<String>,
    pub afternoon_17_18: Option<String>,

    pub evening_18_19: Option<String>,
    pub evening_19_20: Option<String>,
    pub evening_20_21: Option<String>,
    pub evening_21_22: Option<String>,
    pub evening_22_23: Option<String>,
    pub evening_23_24: Option<String>,

    pub morning_completed: bool,
    pub afternoon_completed: bool,
    pub evening_completed: bool,

    pub productivity_score: f64,
    pub notes: Option<String>,

    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Request body for both create and full-replace update. Absent optional
/// fields deserialize to `None`/defaults and are written as-is: an update
/// with an omitted slot clears that slot.
#[derive(Debug, Clone, Deserialize)]
pub struct EventPayload {
    #[serde(deserialize_with = "deserialize_event_date")]
    pub date: NaiveDateTime,
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub morning_7_8: Option<String>,
    #[serde(default)]
    pub morning_8_9: Option<String>,
    #[serde(default)]
    pub morning_9_10: Option<String>,
    #[serde(default)]
    pub morning_10_11: Option<String>,
    #[serde(default)]
    pub morning_11_12: Option<String>,

    #[serde(default)]
    pub afternoon_12_13: Option<String>,
    #[serde(default)]
    pub afternoon_13_14: Option<String>,
    #[serde(default)]
    pub afternoon_14_15: Option<String>,
    #[serde(default)]
    pub afternoon_15_16: Option<String>,
    #[serde(default)]
    pub afternoon_16_17: Option<String>,
    #[serde(default)]
    pub afternoon_17_18: Option<String>,

    #[serde(default)]
    pub evening_18_19: Option<String>,
    #[serde(default)]
    pub evening_19_20: Option<String>,
    #[serde(default)]
    pub evening_20_21: Option<String>,
    #[serde(default)]
    pub evening_21_22: Option<String>,
    #[serde(default)]
    pub evening_22_23: Option<String>,
    #[serde(default)]
    pub evening_23_24: Option<String>,

    #[serde(default)]
    pub morning_completed: bool,
    #[serde(default)]
    pub afternoon_completed: bool,
    #[serde(default)]
    pub evening_completed: bool,

    #[serde(default)]
    pub productivity_score: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Accepts a full ISO-8601 datetime (`2024-03-04T09:00:00`, with or without
/// fractional seconds, `T` or space separator) or a bare date, which maps to
/// midnight.
fn deserialize_event_date<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    if let Ok(dt) = NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(dt);
    }

    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|_| {
            serde::de::Error::custom(format!(
                "invalid datetime '{raw}': expected ISO-8601, e.g. 2024-03-04T09:00:00"
            ))
        })
}
