//! DTOs for link shortening endpoint.

use serde::Deserialize;
use tracing::debug;
use validator::Validate;

use crate::error::AppError;
use crate::utils::url_reference::validate_url_reference;

/// Request to shorten a single URL.
///
/// ```json
/// { "url": "https://example.com/page" }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten: an absolute URL or a relative reference.
    /// Checked for syntax only, never fetched.
    #[validate(custom(function = "validate_url_reference"))]
    pub url: String,
}

impl ShortenRequest {
    /// Decodes the request from raw body bytes.
    ///
    /// The content-type header is not consulted: any body that is a JSON object
    /// with a string `url` field is accepted. Unknown fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidBody`] if the body is not valid JSON or does
    /// not match the expected shape.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        serde_json::from_slice(body).map_err(|err| {
            debug!(error = %err, "Rejected shorten request body");
            AppError::InvalidBody
        })
    }
}
