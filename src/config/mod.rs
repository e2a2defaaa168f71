//! Configuration structures and loading utilities.
//!
//! This module contains all configuration structures used by the application,
//! including environment variable loading and default values.

pub mod rate_limit;
pub mod settings;

pub use rate_limit::*;
pub use settings::*;
