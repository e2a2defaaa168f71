//! Application settings loaded from the environment.

use std::env;
use thiserror::Error;

/// Error raised when the environment is missing a required setting
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Application settings, read once at startup
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Database DSN prefix (e.g. "sqlite://")
    pub database_url: String,
    /// Database name, appended to `database_url` to form the full DSN
    pub database_name: String,
    /// Enable SQL statement logging
    pub echo_sql: bool,
    /// API key for the upstream weather API
    pub api_key: String,
    /// Base URL of the upstream weather API
    pub api_base_url: String,
}

impl AppSettings {
    /// Load settings from environment variables
    ///
    /// `DATABASE_URL`, `DATABASE_NAME`, `API_KEY` and `API_BASE_URL` are
    /// required; `ECHO_SQL` defaults to false.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require_var("DATABASE_URL")?,
            database_name: require_var("DATABASE_NAME")?,
            echo_sql: env::var("ECHO_SQL")
                .map(|v| parse_bool(&v))
                .unwrap_or(false),
            api_key: require_var("API_KEY")?,
            api_base_url: require_var("API_BASE_URL")?,
        })
    }

    /// Full database DSN, the DSN prefix with the database name appended
    pub fn database_dsn(&self) -> String {
        format!("{}{}", self.database_url, self.database_name)
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

fn parse_bool(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
