//! Handler for link shortening endpoint.

use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};
use tracing::debug;
use validator::Validate;

use crate::api::dto::envelope::ApiResponse;
use crate::api::dto::shorten::ShortenRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short code for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page" }
/// ```
///
/// # Response
///
/// `201 Created`:
///
/// ```json
/// { "data": "Ab3dEf92" }
/// ```
///
/// # Errors
///
/// - `422 Unprocessable Entity`, `{"error": "invalid body"}`: body unreadable,
///   too large, not JSON, or missing a string `url` field
/// - `400 Bad Request`, `{"error": "invalid url passed"}`: `url` does not parse
///
/// Each check returns before anything is written to the store, so a request
/// gets exactly one response and failed requests leave no trace.
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<ApiResponse<String>, AppError> {
    let body = body.map_err(|rejection| {
        debug!(error = %rejection, "Failed to read request body");
        AppError::InvalidBody
    })?;

    let payload = ShortenRequest::from_body(&body)?;
    payload.validate()?;

    let link = state.link_service.create_short_link(payload.url).await?;

    Ok(ApiResponse::created(link.code))
}
