//! End-to-end scenarios against the fully configured application:
//! fetch-then-history flow, rate limiting, and the health endpoint.

mod common;

use actix_web::test;
use common::{one_call_body, seed_calgary, spawn_upstream, test_pool};
use std::time::Duration;
use weather_tracker_api::{
    create_app, OpenWeatherClient, RateLimitConfig, SimpleRateLimiter,
};

#[actix_web::test]
async fn test_health_endpoint() {
    let pool = test_pool().await;
    let client = OpenWeatherClient::new("test-key", "http://127.0.0.1:9/");
    let limiter = SimpleRateLimiter::new(RateLimitConfig::default());

    let app = test::init_service(create_app(pool, client, limiter)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json, serde_json::json!({"status": "healthy"}));
}

#[actix_web::test]
async fn test_fetch_then_history_scenario() {
    let pool = test_pool().await;
    seed_calgary(&pool).await;
    let base_url = spawn_upstream("200 OK", one_call_body("Clouds"), Duration::ZERO).await;
    let client = OpenWeatherClient::new("test-key", base_url);
    let limiter = SimpleRateLimiter::new(RateLimitConfig {
        requests_per_second: 1000,
        requests_per_hour: 10_000,
    });

    let app = test::init_service(create_app(pool, client, limiter)).await;

    let req = test::TestRequest::get().uri("/weather/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let weather: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(weather["city_name"], "Calgary");
    assert!(weather.get("current_weather").is_some());

    let req = test::TestRequest::get().uri("/weather/history").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let history: serde_json::Value = test::read_body_json(resp).await;
    let entries = history.as_array().unwrap();
    assert!(!entries.is_empty());
    assert_eq!(entries[0]["name"], "Calgary");
    assert_eq!(entries[0]["summary"], "Clouds");
    assert_eq!(entries[0]["response_status"], "Success");
    assert_eq!(entries[0]["response_code"], 200);
    assert!(entries[0].get("created_at").is_some());
}

#[actix_web::test]
async fn test_history_is_empty_array_without_entries() {
    let pool = test_pool().await;
    let client = OpenWeatherClient::new("test-key", "http://127.0.0.1:9/");
    let limiter = SimpleRateLimiter::new(RateLimitConfig::default());

    let app = test::init_service(create_app(pool, client, limiter)).await;

    let req = test::TestRequest::get().uri("/weather/history").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let history: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(history, serde_json::json!([]));
}

#[actix_web::test]
async fn test_second_request_within_a_second_is_rate_limited() {
    let pool = test_pool().await;
    seed_calgary(&pool).await;
    let base_url = spawn_upstream("200 OK", one_call_body("Clouds"), Duration::ZERO).await;
    let client = OpenWeatherClient::new("test-key", base_url);
    // The production limits: 1/second, 30/hour
    let limiter = SimpleRateLimiter::new(RateLimitConfig::default());

    let app = test::init_service(create_app(pool, client, limiter)).await;

    let req = test::TestRequest::get()
        .uri("/weather/1")
        .insert_header(("X-Forwarded-For", "203.0.113.7"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::get()
        .uri("/weather/1")
        .insert_header(("X-Forwarded-For", "203.0.113.7"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 429);

    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json["error"], "Rate limit exceeded. Please try again later.");
}

#[actix_web::test]
async fn test_history_endpoint_is_not_rate_limited() {
    let pool = test_pool().await;
    let client = OpenWeatherClient::new("test-key", "http://127.0.0.1:9/");
    // Tight limits that would reject repeated weather fetches
    let limiter = SimpleRateLimiter::new(RateLimitConfig::default());

    let app = test::init_service(create_app(pool, client, limiter)).await;

    for _ in 0..3 {
        let req = test::TestRequest::get()
            .uri("/weather/history")
            .insert_header(("X-Forwarded-For", "203.0.113.7"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }
}

#[actix_web::test]
async fn test_openapi_spec_is_served() {
    let pool = test_pool().await;
    let client = OpenWeatherClient::new("test-key", "http://127.0.0.1:9/");
    let limiter = SimpleRateLimiter::new(RateLimitConfig::default());

    let app = test::init_service(create_app(pool, client, limiter)).await;

    let req = test::TestRequest::get().uri("/api/spec/v2").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json["info"]["title"], "Weather Tracker API");
    assert!(json["paths"].get("/weather/history").is_some());
}
