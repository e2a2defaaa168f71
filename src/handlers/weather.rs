//! Weather endpoint handlers.

use crate::{
    errors::ApiError,
    models::{WeatherHistoryResponse, WeatherResponse},
    services::{
        openweather::OpenWeatherClient,
        rate_limit::SimpleRateLimiter,
        weather::WeatherService,
        weather_log::{WeatherLogStore, HISTORY_LIMIT},
    },
    utils::extract_client_ip,
};
use actix_web::{web, Error, HttpRequest, Result};
use paperclip::actix::api_v2_operation;
use sqlx::SqlitePool;

/// Weather fetch endpoint
///
/// Looks the city up by id, fetches current weather for its coordinates from
/// the upstream API and records the attempt in the request log.
#[api_v2_operation(
    summary = "Weather Fetch Endpoint",
    description = "Fetches current weather for the city with the given id and logs the attempt.",
    tags("Weather"),
    responses(
        (status = 200, description = "Successful response", body = WeatherResponse),
        (status = 404, description = "City not found"),
        (status = 429, description = "Too Many Requests"),
        (status = 500, description = "Upstream weather API failure"),
        (status = 504, description = "Upstream weather API timeout")
    )
)]
pub async fn get_weather(
    req: HttpRequest,
    path: web::Path<i64>,
    pool: web::Data<SqlitePool>,
    client: web::Data<OpenWeatherClient>,
) -> Result<web::Json<WeatherResponse>, Error> {
    // Check if rate limiter is available in app data
    if let Some(limiter) = req.app_data::<web::Data<SimpleRateLimiter>>() {
        let ip = extract_client_ip(&req);
        if !limiter.check_rate_limit(&ip) {
            tracing::warn!(client = %ip, "rate limit exceeded on weather fetch");
            return Err(ApiError::RateLimited.into());
        }
    }

    let service = WeatherService::new(pool.get_ref().clone(), client.get_ref().clone());
    let response = service.get_weather(path.into_inner()).await?;

    Ok(web::Json(response))
}

/// Weather history endpoint
///
/// Returns the five most recent successful fetch attempts joined with city
/// names, newest first. Not rate limited.
#[api_v2_operation(
    summary = "Weather History Endpoint",
    description = "Returns the most recent successful weather fetches, newest first.",
    tags("Weather"),
    responses(
        (status = 200, description = "Successful response", body = Vec<WeatherHistoryResponse>),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn get_weather_history(
    pool: web::Data<SqlitePool>,
) -> Result<web::Json<Vec<WeatherHistoryResponse>>, Error> {
    let store = WeatherLogStore::new(pool.get_ref().clone());
    let history = store
        .recent_successes(HISTORY_LIMIT)
        .await
        .map_err(ApiError::from)?;

    Ok(web::Json(history))
}
