//! Append-only request log and history reader.

use crate::models::{LogStatus, WeatherHistoryResponse};
use chrono::Utc;
use sqlx::SqlitePool;

/// Number of entries returned by the history endpoint
pub const HISTORY_LIMIT: i64 = 5;

/// Store for the `weather_loggers` table
#[derive(Clone)]
pub struct WeatherLogStore {
    pool: SqlitePool,
}

impl WeatherLogStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append one log row for a fetch attempt
    ///
    /// Runs in its own transaction: committed on success, rolled back on any
    /// early exit. Store failures surface to the caller, never swallowed.
    pub async fn record(
        &self,
        city_id: i64,
        response_code: i64,
        status: LogStatus,
        summary: &str,
    ) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO weather_loggers
                (city_id, response_code, response_status, response, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(city_id)
        .bind(response_code)
        .bind(status.as_str())
        .bind(summary)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        tx.commit().await
    }

    /// Fetch the most recent successful log rows joined with city names
    ///
    /// Newest first; an empty result is not an error.
    pub async fn recent_successes(
        &self,
        limit: i64,
    ) -> Result<Vec<WeatherHistoryResponse>, sqlx::Error> {
        sqlx::query_as::<_, WeatherHistoryResponse>(
            "SELECT w.created_at, w.response AS summary, w.response_code,
                    w.response_status, c.name
             FROM weather_loggers w
             JOIN cities c ON w.city_id = c.id
             WHERE w.response_status = ?1
             ORDER BY w.created_at DESC
             LIMIT ?2",
        )
        .bind(LogStatus::Success.as_str())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }
}
