//! HTTP middleware wrapped around every route.
//!
//! Applied outermost first: request id assignment, tracing, request id
//! propagation, then panic recovery closest to the handlers.

pub mod recover;
pub mod request_id;
pub mod tracing;
