//! Client for the upstream weather API.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Failure modes of a single weather fetch
#[derive(Debug, Error)]
pub enum WeatherApiError {
    /// The upstream returned a non-success HTTP status
    #[error("weather API returned status {status}")]
    Upstream { status: u16 },

    /// No response arrived within the client deadline
    #[error("weather API request timed out")]
    Timeout,

    /// Transport-level failure or an unparseable response body
    #[error("weather API request failed: {0}")]
    Request(reqwest::Error),
}

/// Successful upstream response: the HTTP status and the raw "current" object
#[derive(Debug, Clone)]
pub struct WeatherFetch {
    pub status_code: u16,
    pub current: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct OneCallPayload {
    current: serde_json::Value,
}

/// Client for the OpenWeatherMap "one call" endpoint
///
/// One attempt per invocation, no retries. A fresh connection scope is
/// acquired per call and released when the call completes.
#[derive(Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl OpenWeatherClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the request deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetch current weather for the given coordinates
    pub async fn fetch_current(&self, lat: f64, lon: f64) -> Result<WeatherFetch, WeatherApiError> {
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(WeatherApiError::Request)?;

        let response = client
            .get(&self.base_url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
                ("exclude", "minutely,hourly,daily,alerts".to_string()),
            ])
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherApiError::Upstream {
                status: status.as_u16(),
            });
        }

        let payload: OneCallPayload = response.json().await.map_err(classify)?;

        Ok(WeatherFetch {
            status_code: status.as_u16(),
            current: payload.current,
        })
    }
}

fn classify(err: reqwest::Error) -> WeatherApiError {
    if err.is_timeout() {
        WeatherApiError::Timeout
    } else {
        WeatherApiError::Request(err)
    }
}
