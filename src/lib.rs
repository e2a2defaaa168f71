//! Weather Tracker API - a small Actix Web service that fetches current
//! weather for known cities and keeps a queryable log of every attempt.
//!
//! Per request the service performs three steps: a city lookup by id, an
//! outbound call to the OpenWeatherMap API with the city's coordinates, and
//! an append to the request log recording the outcome. The log is exposed
//! through a history endpoint returning the most recent successful fetches.
//!
//! ## Architecture
//!
//! The codebase is organized into focused modules:
//! - `models/` - Database rows and request/response models
//! - `handlers/` - HTTP request handlers for each endpoint
//! - `services/` - City store, request log, upstream client, orchestration
//! - `utils/` - Utility functions and helpers
//! - `config/` - Configuration structures and environment loading
//! - `db` - Connection pool construction and schema bootstrap
//! - `errors` - Error taxonomy and HTTP status mapping
//!
//! ## Quick Start
//!
//! ```no_run
//! use weather_tracker_api::{create_app, OpenWeatherClient, RateLimitConfig, SimpleRateLimiter};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     // Build the pool, client and limiter, then serve create_app(..)
//!     Ok(())
//! }
//! ```

// Core modules
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types and functions for convenience
pub use config::{AppSettings, ConfigError, RateLimitConfig};
pub use errors::ApiError;
pub use handlers::{create_app, create_openapi_spec, get_weather, get_weather_history, health};
pub use models::{
    City, CurrentWeather, HealthResponse, LogStatus, WeatherHistoryResponse, WeatherLogEntry,
    WeatherResponse,
};
pub use services::{
    CityStore, OpenWeatherClient, SimpleRateLimiter, WeatherApiError, WeatherLogStore,
    WeatherService, HISTORY_LIMIT,
};
pub use utils::extract_client_ip;
