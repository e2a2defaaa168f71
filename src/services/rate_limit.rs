//! Rate limiting service for controlling request frequency.

use crate::config::RateLimitConfig;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

const SECOND_WINDOW: Duration = Duration::from_secs(1);
const HOUR_WINDOW: Duration = Duration::from_secs(3600);

/// One fixed counting window
#[derive(Clone, Copy)]
struct Window {
    started: Instant,
    count: usize,
}

impl Window {
    fn new(now: Instant) -> Self {
        Self {
            started: now,
            count: 0,
        }
    }

    /// Reset the window if it has lapsed, then report whether another
    /// request fits under `limit`.
    fn admit(&mut self, now: Instant, span: Duration, limit: usize) -> bool {
        if now.duration_since(self.started) >= span {
            self.started = now;
            self.count = 0;
        }
        self.count < limit
    }
}

struct ClientWindows {
    second: Window,
    hour: Window,
}

/// Simple in-memory rate limiter
///
/// Tracks two fixed windows per client address (per-second and per-hour).
/// A request is allowed only when both windows are under their limits;
/// counters advance only for allowed requests. This is the only mutable
/// state shared across requests, so it sits behind a mutex and one instance
/// is shared by all server workers.
#[derive(Clone)]
pub struct SimpleRateLimiter {
    config: RateLimitConfig,
    storage: Arc<Mutex<HashMap<String, ClientWindows>>>,
}

impl SimpleRateLimiter {
    /// Create a new rate limiter with the given configuration
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            storage: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Check if the given key (typically IP address) is within rate limits
    ///
    /// Returns `true` if the request should be allowed, `false` if rate limited.
    pub fn check_rate_limit(&self, key: &str) -> bool {
        let mut storage = self.storage.lock().unwrap();
        let now = Instant::now();

        // Clean up entries whose hour window has lapsed
        storage.retain(|_, windows| now.duration_since(windows.hour.started) < HOUR_WINDOW);

        let windows = storage.entry(key.to_string()).or_insert_with(|| ClientWindows {
            second: Window::new(now),
            hour: Window::new(now),
        });

        let allowed = windows
            .second
            .admit(now, SECOND_WINDOW, self.config.requests_per_second)
            && windows
                .hour
                .admit(now, HOUR_WINDOW, self.config.requests_per_hour);

        if allowed {
            windows.second.count += 1;
            windows.hour.count += 1;
        }

        allowed
    }
}
