//! Core domain entities.
//!
//! - [`Link`] - A short code mapped to its original URL

pub mod link;

pub use link::Link;
