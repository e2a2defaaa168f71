#![allow(dead_code)]
//! Shared helpers for integration tests: an in-memory database and a canned
//! HTTP upstream standing in for the weather API.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// In-memory SQLite pool with the schema applied
///
/// Capped at one connection so every query sees the same in-memory database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            SqliteConnectOptions::from_str("sqlite::memory:")
                .unwrap()
                .foreign_keys(true),
        )
        .await
        .unwrap();

    weather_tracker_api::db::ensure_schema(&pool).await.unwrap();
    pool
}

/// Seed the reference city used by the scenarios
pub async fn seed_calgary(pool: &SqlitePool) {
    sqlx::query("INSERT INTO cities (id, name, latitude, longitude) VALUES (1, 'Calgary', 51.04, -114.06)")
        .execute(pool)
        .await
        .unwrap();
}

/// A fixed one-call payload with the given primary condition
pub fn one_call_body(condition: &str) -> String {
    serde_json::json!({
        "lat": 51.04,
        "lon": -114.06,
        "timezone": "America/Edmonton",
        "current": {
            "dt": 1716916800,
            "temp": 11.5,
            "humidity": 62,
            "weather": [
                {"id": 803, "main": condition, "description": "broken clouds", "icon": "04d"}
            ]
        }
    })
    .to_string()
}

/// The "current" object embedded in [`one_call_body`]
pub fn one_call_current(condition: &str) -> serde_json::Value {
    serde_json::json!({
        "dt": 1716916800,
        "temp": 11.5,
        "humidity": 62,
        "weather": [
            {"id": 803, "main": condition, "description": "broken clouds", "icon": "04d"}
        ]
    })
}

/// Serve a canned HTTP/1.1 response on a loopback socket
///
/// Every connection gets the same status line and body; `delay` holds the
/// response back to provoke client timeouts. Returns the base URL.
pub async fn spawn_upstream(status_line: &'static str, body: String, delay: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let body = body.clone();
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                let response = format!(
                    "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
            });
        }
    });

    format!("http://{addr}")
}
