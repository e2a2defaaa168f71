//! Append-only log of weather fetch attempts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome recorded for a single weather fetch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogStatus {
    Success,
    Failure,
}

impl LogStatus {
    /// Text stored in the `response_status` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failure => "Failure",
        }
    }
}

impl std::fmt::Display for LogStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row from the `weather_loggers` table
///
/// One row is appended per fetch attempt, success or failure; rows are never
/// updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WeatherLogEntry {
    pub id: i64,
    pub city_id: i64,
    pub response_code: i64,
    pub response_status: String,
    pub response: String,
    pub created_at: DateTime<Utc>,
}
