//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check payload, sent inside the `data` field of the envelope.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,

    /// Number of short links currently held in the store.
    pub links: usize,
}
