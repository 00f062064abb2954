//! JSON response envelope shared by every API endpoint.
//!
//! Every JSON body has the shape `{"error"?: string, "data"?: any}` with at
//! most one of the two fields present.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Pre-encoded fallback body, used when the real envelope cannot be serialized.
const INTERNAL_ERROR_BODY: &str = r#"{"error":"something went wrong"}"#;

/// Serialized form of the envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// An envelope paired with the status code it is sent with.
#[derive(Debug)]
pub struct ApiResponse<T> {
    status: StatusCode,
    body: Envelope<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// `200 OK` carrying `data`.
    pub fn ok(data: T) -> Self {
        Self::with_data(StatusCode::OK, data)
    }

    /// `201 Created` carrying `data`.
    pub fn created(data: T) -> Self {
        Self::with_data(StatusCode::CREATED, data)
    }

    /// Success envelope carrying `data` with the given status.
    fn with_data(status: StatusCode, data: T) -> Self {
        Self {
            status,
            body: Envelope {
                error: None,
                data: Some(data),
            },
        }
    }
}

impl ApiResponse<()> {
    /// Error envelope: `{"error": message}` without a data field.
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: Envelope {
                error: Some(message.into()),
                data: None,
            },
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.body) {
            Ok(bytes) => (
                self.status,
                [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)],
                bytes,
            )
                .into_response(),
            Err(err) => {
                error!(error = %err, status = %self.status, "Failed to serialize response envelope");
                internal_error_response()
            }
        }
    }
}

/// `500 Internal Server Error` with the generic error envelope.
///
/// Built from a constant so it cannot fail itself.
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)],
        INTERNAL_ERROR_BODY,
    )
        .into_response()
}
