//! API error taxonomy and HTTP status mapping.
//!
//! Domain errors raised by the data-access and client layers are converted
//! once at the service boundary into an [`ApiError`], which the HTTP layer
//! maps to a status code and a minimal `{"error": message}` body. Internal
//! detail (queries, stack traces) never reaches the caller.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// Errors surfaced by the API, each carrying its transport status
#[derive(Debug, Error)]
pub enum ApiError {
    /// Requested entity does not exist
    #[error("{message}")]
    NotFound { message: String },

    /// A downstream dependency (database or upstream API) failed
    #[error("{message}")]
    Service { message: String, status: u16 },

    /// Per-address rate limit exceeded
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// A service failure surfaced as HTTP 500 or 504
    pub fn service_unavailable(message: impl Into<String>, status: u16) -> Self {
        Self::Service {
            message: message.into(),
            status,
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!(error = %err, "database operation failed");
        Self::Service {
            message: "Internal server error".to_string(),
            status: 500,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Service { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}
