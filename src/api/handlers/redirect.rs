//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Read-only: the store is never modified.
///
/// # Response
///
/// `308 Permanent Redirect` with `Location` set to the stored URL, byte for
/// byte. Relative references are passed through unresolved.
///
/// # Errors
///
/// - `404 Not Found` with a plain-text body if the code is unknown
/// - `500 Internal Server Error` with the JSON envelope if the stored URL
///   cannot be sent as a header value
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.resolve(&code).await?;

    let location = HeaderValue::try_from(link.long_url.as_str()).map_err(|e| {
        AppError::Internal(format!(
            "stored url for {} is not a valid Location header: {e}",
            link.code
        ))
    })?;

    debug!(code = %link.code, "Redirecting");

    Ok((StatusCode::PERMANENT_REDIRECT, [(header::LOCATION, location)]))
}
