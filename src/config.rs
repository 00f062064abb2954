//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A `.env` file in the working directory is honoured (loaded by the
//! binary via `dotenvy`).
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log filter directive (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `MAX_BODY_BYTES` - Request body size limit (default: 65536)
//!
//! Nothing is required; the service starts with defaults alone.

use anyhow::{Context, Result};
use std::env;

/// Smallest accepted request body limit.
const MIN_BODY_BYTES: usize = 64;

/// Largest accepted request body limit (10 MiB).
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Upper bound on request body size. Bodies above it are answered with
    /// `422 invalid body`.
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            max_body_bytes: 64 * 1024,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// [`Config::default`] for anything unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `MAX_BODY_BYTES` is set but is not a number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let max_body_bytes = match env::var("MAX_BODY_BYTES") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("MAX_BODY_BYTES must be a number, got '{}'", value))?,
            Err(_) => defaults.max_body_bytes,
        };

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            max_body_bytes,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `max_body_bytes` is outside 64 bytes..=10 MiB
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        match self.listen_addr.rsplit_once(':') {
            Some((host, port)) if !host.is_empty() && port.parse::<u16>().is_ok() => {}
            _ => anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            ),
        }

        if !(MIN_BODY_BYTES..=MAX_BODY_BYTES).contains(&self.max_body_bytes) {
            anyhow::bail!(
                "MAX_BODY_BYTES must be between {} and {}, got {}",
                MIN_BODY_BYTES,
                MAX_BODY_BYTES,
                self.max_body_bytes
            );
        }

        Ok(())
    }

    /// Returns whether logs are emitted as JSON lines.
    pub fn is_json_logging(&self) -> bool {
        self.log_format == "json"
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Max body bytes: {}", self.max_body_bytes);
    }
}

/// Loads configuration from environment variables, applies command-line
/// overrides, then validates the result.
///
/// `None` leaves the environment (or default) value in place.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env(listen: Option<String>, log_format: Option<String>) -> Result<Config> {
    let mut config = Config::from_env()?;
    if let Some(listen) = listen {
        config.listen_addr = listen;
    }
    if let Some(log_format) = log_format {
        config.log_format = log_format;
    }
    config.validate()?;
    Ok(config)
}
