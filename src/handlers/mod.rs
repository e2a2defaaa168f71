//! HTTP request handlers for API endpoints.
//!
//! This module contains all the HTTP request handlers that process
//! incoming requests and generate responses.

pub mod health;
pub mod openapi;
pub mod weather;

pub use health::*;
pub use openapi::*;
pub use weather::*;
