//! # Mem Shortener
//!
//! A small URL shortening service built with Axum. Long URLs are mapped to
//! random eight-character codes held in process memory.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The link entity and the code store trait
//! - **Application Layer** ([`application`]) - Link creation and resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory code store
//! - **API Layer** ([`api`]) - Handlers, DTOs, response envelope, and middleware
//!
//! ## Endpoints
//!
//! - `POST /api/shorten` with `{"url": "..."}` answers `201 {"data": "<code>"}`
//! - `GET /{code}` answers `308` to the stored URL, or `404`
//! - `GET /health` reports status and the number of stored links
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl -X POST localhost:3000/api/shorten -d '{"url":"https://example.com/page"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::Link;
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::MemoryLinkRepository;
    pub use crate::state::AppState;
}
