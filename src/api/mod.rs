//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses in the shared JSON envelope.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects and the response envelope
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing, request id and panic recovery middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
