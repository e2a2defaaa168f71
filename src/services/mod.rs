//! Business logic and service layer modules.
//!
//! This module contains the core logic of the application: the city store,
//! the request log, the upstream weather client, the orchestrating weather
//! service and rate limiting.

pub mod city_store;
pub mod openweather;
pub mod rate_limit;
pub mod weather;
pub mod weather_log;

pub use city_store::*;
pub use openweather::*;
pub use rate_limit::*;
pub use weather::*;
pub use weather_log::*;
