//! Health check endpoint handler.

use crate::models::HealthResponse;
use actix_web::{web, Error, Result};
use paperclip::actix::api_v2_operation;

/// Health check endpoint
///
/// Returns the current health status of the API. This endpoint can be used
/// by load balancers, monitoring systems, and health check probes.
#[api_v2_operation(
    summary = "Health Check Endpoint",
    description = "Returns the current health status of the API in JSON format.",
    tags("Health"),
    responses(
        (status = 200, description = "Successful response", body = HealthResponse)
    )
)]
pub async fn health() -> Result<web::Json<HealthResponse>, Error> {
    let response = HealthResponse {
        status: "healthy".to_string(),
    };

    Ok(web::Json(response))
}
