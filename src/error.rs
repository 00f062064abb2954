//! Application error type and its HTTP mapping.
//!
//! Every failure a handler can hit ends up as an [`AppError`]. Client input
//! problems and internal faults share the JSON envelope from
//! [`crate::api::dto::envelope`]; unknown short codes answer with plain text.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::api::dto::envelope::{ApiResponse, internal_error_response};

/// Message returned when the request body cannot be decoded.
pub const INVALID_BODY_MESSAGE: &str = "invalid body";

/// Message returned when the submitted URL does not parse.
pub const INVALID_URL_MESSAGE: &str = "invalid url passed";

/// Plain-text body returned for unknown short codes.
pub const NOT_FOUND_MESSAGE: &str = "url not found";

/// Generic message returned for any internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "something went wrong";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Body missing, unreadable, not JSON, or not shaped like the request DTO.
    #[error("invalid body")]
    InvalidBody,

    /// The `url` field is not a syntactically valid URL.
    #[error("invalid url passed")]
    InvalidUrl,

    /// No mapping exists for the requested short code.
    #[error("url not found")]
    NotFound,

    /// A freshly generated code is already present in the store.
    #[error("short code {code} is already taken")]
    Conflict { code: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidBody => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidUrl => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(_: validator::ValidationErrors) -> Self {
        AppError::InvalidUrl
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidBody => {
                ApiResponse::error(self.status_code(), INVALID_BODY_MESSAGE).into_response()
            }
            AppError::InvalidUrl => {
                ApiResponse::error(self.status_code(), INVALID_URL_MESSAGE).into_response()
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response(),
            AppError::Conflict { .. } | AppError::Internal(_) => {
                error!(error = %self, "Request failed with internal error");
                internal_error_response()
            }
        }
    }
}
