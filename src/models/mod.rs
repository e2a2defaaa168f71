//! Data models and schemas for the Weather Tracker API.
//!
//! This module contains the data structures used throughout the application:
//! database rows, the log-status enumeration, and response models.

pub mod api;
pub mod city;
pub mod weather_log;

pub use api::*;
pub use city::*;
pub use weather_log::*;
