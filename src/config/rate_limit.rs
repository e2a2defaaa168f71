//! Rate limiting configuration.

use std::env;

/// Configuration for per-address rate limiting
///
/// The defaults mirror the upstream weather API quota: one request per
/// second, and thirty per hour (half the free-tier hourly allowance).
#[derive(Clone)]
pub struct RateLimitConfig {
    pub requests_per_second: usize,
    pub requests_per_hour: usize,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_second: 1,
            requests_per_hour: 30,
        }
    }
}

impl RateLimitConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let requests_per_second = env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);

        let requests_per_hour = env::var("RATE_LIMIT_PER_HOUR")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            requests_per_second,
            requests_per_hour,
        }
    }
}
