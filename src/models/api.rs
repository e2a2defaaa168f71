//! API response models for the weather endpoints.

use chrono::{DateTime, Utc};
use paperclip::actix::Apiv2Schema;
use paperclip::v2::schema::Apiv2Schema as Apiv2SchemaTrait;
use serde::{Deserialize, Serialize};

/// Response model for the health check endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct HealthResponse {
    pub status: String,
}

/// Raw "current" sub-object from the upstream payload, passed through
/// untyped; documented as a free-form object in the OpenAPI spec.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrentWeather(pub serde_json::Value);

impl Apiv2SchemaTrait for CurrentWeather {}

/// Response model for `GET /weather/{city_id}`
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct WeatherResponse {
    /// Id of the city
    pub id: i64,
    /// Name of the city
    pub city_name: String,
    /// Current weather in the city
    pub current_weather: CurrentWeather,
}

/// One entry in the `GET /weather/history` response
///
/// Projected straight from the join of `weather_loggers` with `cities`;
/// `summary` is the `response` column aliased for display.
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema, sqlx::FromRow)]
pub struct WeatherHistoryResponse {
    /// Time the fetch attempt was recorded
    pub created_at: DateTime<Utc>,
    /// Primary weather condition label stored with the attempt
    pub summary: String,
    /// HTTP status code recorded for the attempt
    pub response_code: i64,
    /// "Success" or "Failure"
    pub response_status: String,
    /// Name of the city
    pub name: String,
}
