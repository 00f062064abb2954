//! Panic recovery middleware.
//!
//! A panicking handler must not take the connection down with it: the panic
//! is caught, logged, and answered with the generic 500 envelope.

use std::any::Any;

use axum::response::Response;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::error;

use crate::api::dto::envelope::internal_error_response;

/// Converts a caught panic into a response.
pub type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Creates the panic recovery layer.
pub fn layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else {
        "unknown panic payload"
    };

    error!(panic = %detail, "Request handler panicked");

    internal_error_response()
}
