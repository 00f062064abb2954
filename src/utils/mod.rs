//! Utility functions used across the application.
//!
//! - [`code_generator`] - Short code generation and shape checks
//! - [`url_reference`] - Syntax checks for submitted URLs

pub mod code_generator;
pub mod url_reference;
