//! Weather orchestration: city lookup, upstream fetch, outcome logging.

use crate::{
    errors::ApiError,
    models::{CurrentWeather, LogStatus, WeatherResponse},
    services::{
        city_store::CityStore,
        openweather::{OpenWeatherClient, WeatherApiError},
        weather_log::WeatherLogStore,
    },
};
use sqlx::SqlitePool;

/// Composes the city store, the weather client and the request log
///
/// The only component with branching logic: every call that reaches the
/// upstream fetch writes exactly one log row before returning or failing.
/// A failed city lookup writes nothing, since it precedes the fetch.
pub struct WeatherService {
    cities: CityStore,
    log: WeatherLogStore,
    client: OpenWeatherClient,
}

impl WeatherService {
    pub fn new(pool: SqlitePool, client: OpenWeatherClient) -> Self {
        Self {
            cities: CityStore::new(pool.clone()),
            log: WeatherLogStore::new(pool),
            client,
        }
    }

    /// Fetch current weather for a city and log the attempt
    pub async fn get_weather(&self, city_id: i64) -> Result<WeatherResponse, ApiError> {
        let city = self.cities.get(city_id).await?;

        match self.client.fetch_current(city.latitude, city.longitude).await {
            Ok(fetch) => {
                let summary = condition_summary(&fetch.current);
                self.log
                    .record(city.id, i64::from(fetch.status_code), LogStatus::Success, &summary)
                    .await?;

                Ok(WeatherResponse {
                    id: city.id,
                    city_name: city.name,
                    current_weather: CurrentWeather(fetch.current),
                })
            }
            Err(WeatherApiError::Timeout) => {
                self.log.record(city.id, 504, LogStatus::Failure, "").await?;
                Err(ApiError::service_unavailable(
                    "Timeout fetching weather data",
                    504,
                ))
            }
            Err(err) => {
                // Non-2xx and transport failures are collapsed to one code,
                // matching what gets logged.
                tracing::error!(city_id, error = %err, "weather fetch failed");
                self.log.record(city.id, 500, LogStatus::Failure, "").await?;
                Err(ApiError::service_unavailable(
                    "Failed to fetch weather data",
                    500,
                ))
            }
        }
    }
}

/// Primary weather condition label from the "current" payload
///
/// Stored with the log row for history display only; an absent or malformed
/// condition list degrades to an empty summary rather than an error.
fn condition_summary(current: &serde_json::Value) -> String {
    current
        .get("weather")
        .and_then(|w| w.get(0))
        .and_then(|w| w.get("main"))
        .and_then(|m| m.as_str())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_condition_summary_extraction() {
        let current = json!({
            "temp": 12.4,
            "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds"}]
        });
        assert_eq!(condition_summary(&current), "Clouds");
    }

    #[test]
    fn test_condition_summary_missing_fields() {
        assert_eq!(condition_summary(&json!({})), "");
        assert_eq!(condition_summary(&json!({"weather": []})), "");
        assert_eq!(condition_summary(&json!({"weather": [{"id": 803}]})), "");
    }
}
