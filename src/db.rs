//! Database pool construction and schema bootstrap.
//!
//! The pool is built once at startup and injected into request handlers via
//! `web::Data`; no ambient global connection state exists.

use crate::config::AppSettings;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use std::str::FromStr;

/// Build a connection pool from the application settings
///
/// Foreign keys are enforced on every connection; SQL statement logging is
/// driven by the `ECHO_SQL` setting.
pub async fn connect(settings: &AppSettings) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&settings.database_dsn())?
        .create_if_missing(true)
        .foreign_keys(true)
        .log_statements(if settings.echo_sql {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Off
        });

    SqlitePoolOptions::new().connect_with(options).await
}

/// Create the `cities` and `weather_loggers` tables if they do not exist
///
/// Idempotent bootstrap, not a migration system. City rows themselves are
/// seeded out of band.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS cities (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            latitude REAL NOT NULL,
            longitude REAL NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS weather_loggers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            city_id INTEGER NOT NULL REFERENCES cities(id),
            response_code INTEGER NOT NULL,
            response_status TEXT NOT NULL,
            response TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}
