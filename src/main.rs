use actix_web::HttpServer;
use tracing_subscriber::EnvFilter;
use weather_tracker_api::{
    config::{AppSettings, RateLimitConfig},
    create_app, db,
    services::{openweather::OpenWeatherClient, rate_limit::SimpleRateLimiter},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging (run with RUST_LOG=info, for example)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = AppSettings::from_env().map_err(to_io_error)?;

    let pool = db::connect(&settings).await.map_err(to_io_error)?;
    db::ensure_schema(&pool).await.map_err(to_io_error)?;

    let weather_client =
        OpenWeatherClient::new(settings.api_key.clone(), settings.api_base_url.clone());
    // One limiter instance shared across all workers
    let limiter = SimpleRateLimiter::new(RateLimitConfig::from_env());

    tracing::info!("Server running at http://127.0.0.1:8080");

    HttpServer::new(move || create_app(pool.clone(), weather_client.clone(), limiter.clone()))
        .bind("127.0.0.1:8080")?
        .run()
        .await
}

fn to_io_error<E: std::fmt::Display>(err: E) -> std::io::Error {
    std::io::Error::other(err.to_string())
}
