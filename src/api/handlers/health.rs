//! Handler for health check endpoint.

use axum::extract::State;

use crate::api::dto::envelope::ApiResponse;
use crate::api::dto::health::HealthResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "data": {
///     "status": "healthy",
///     "version": "0.1.0",
///     "links": 42
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<ApiResponse<HealthResponse>, AppError> {
    let links = state.link_service.count_links().await?;

    Ok(ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        links,
    }))
}
