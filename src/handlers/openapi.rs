//! OpenAPI specification generation and app factory.

use crate::{
    handlers::{get_weather, get_weather_history, health},
    services::{openweather::OpenWeatherClient, rate_limit::SimpleRateLimiter},
};
use actix_web::App;
use paperclip::actix::{web, OpenApiExt};
use paperclip::v2::models::{DefaultApiRaw, Info};
use sqlx::SqlitePool;

/// Creates the shared OpenAPI specification for the API
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Weather Tracker API".into(),
            version: "1.0.0".into(),
            description: Some(
                "Looks a city up by id, fetches current weather for its coordinates \
                 from the OpenWeatherMap API and records every attempt in a request \
                 log queryable through the history endpoint.\n\n\
                 The weather fetch endpoint is rate limited per client address \
                 (1 request/second, 30/hour); the history endpoint is not."
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates the application with shared state and routes
///
/// The pool, upstream client and rate limiter are constructed once at
/// startup and injected here, so every worker shares the same limiter and
/// connection pool. Used both by `main` and by the integration tests.
pub fn create_app(
    pool: SqlitePool,
    weather_client: OpenWeatherClient,
    limiter: SimpleRateLimiter,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(web::Data::new(pool))
        .app_data(web::Data::new(weather_client))
        .app_data(web::Data::new(limiter))
        .service(web::resource("/health").route(web::get().to(health)))
        // history must be registered ahead of the {city_id} matcher
        .service(web::resource("/weather/history").route(web::get().to(get_weather_history)))
        .service(web::resource("/weather/{city_id}").route(web::get().to(get_weather)))
        .with_json_spec_at("/api/spec/v2")
        .build()
}
