//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A `.env` file is honored when `main` calls `dotenvy::dotenv()`.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `PHRASE_MAX_LENGTH` - Max characters in shop name, product type, audience
//!   and primary keyword (default: 80, range: 10-200)
//! - `PREVIEW_TAG_COUNT` - Tags revealed in a pack preview (default: 3, max: 13)

use anyhow::Result;
use std::env;

use crate::application::services::SanitizeLimits;
use crate::application::services::sanitizer::DEFAULT_PHRASE_MAX_LENGTH;
use crate::generator::tags::MAX_TAGS;

const DEFAULT_PREVIEW_TAG_COUNT: usize = 3;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Maximum length of a phrase field in a brief.
    pub phrase_max_length: usize,
    /// Number of tags a preview reveals.
    pub preview_tag_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            phrase_max_length: DEFAULT_PHRASE_MAX_LENGTH,
            preview_tag_count: DEFAULT_PREVIEW_TAG_COUNT,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    ///
    /// Unparseable numbers fall back to their defaults; [`Self::validate`]
    /// rejects parseable but out-of-range values.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let phrase_max_length = env::var("PHRASE_MAX_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.phrase_max_length);

        let preview_tag_count = env::var("PREVIEW_TAG_COUNT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.preview_tag_count);

        Self {
            listen_addr,
            log_level,
            log_format,
            phrase_max_length,
            preview_tag_count,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `phrase_max_length` is outside `10..=200`
    /// - `preview_tag_count` exceeds the tag cap
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !(10..=200).contains(&self.phrase_max_length) {
            anyhow::bail!(
                "PHRASE_MAX_LENGTH must be between 10 and 200, got {}",
                self.phrase_max_length
            );
        }

        if self.preview_tag_count > MAX_TAGS {
            anyhow::bail!(
                "PREVIEW_TAG_COUNT must be at most {}, got {}",
                MAX_TAGS,
                self.preview_tag_count
            );
        }

        Ok(())
    }

    /// Sanitizer limits derived from this configuration.
    pub fn sanitize_limits(&self) -> SanitizeLimits {
        SanitizeLimits {
            phrase_max_length: self.phrase_max_length,
        }
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Phrase max length: {}", self.phrase_max_length);
        tracing::info!("  Preview tag count: {}", self.preview_tag_count);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// Expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
