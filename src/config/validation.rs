//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (attempts > 0, backoff cap >= base)
//! - Check destinations and headers would build
//! - Flag configured sections that `layers` leaves out
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: PipelineConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use http::header::{HeaderName, HeaderValue};
use thiserror::Error;
use url::Url;

use crate::config::schema::{BackoffKind, LayerKind, PipelineConfig};

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("layer '{0}' listed more than once")]
    DuplicateLayer(LayerKind),

    #[error("destinations.urls must not be empty")]
    EmptyDestinations,

    #[error("invalid destination '{url}': {reason}")]
    InvalidDestination { url: String, reason: String },

    #[error("retry.max_attempts must be at least 1")]
    ZeroRetryAttempts,

    #[error("retry.max_delay_ms ({max_delay_ms}) is below retry.delay_ms ({delay_ms})")]
    InvalidBackoffRange { delay_ms: u64, max_delay_ms: u64 },

    #[error("invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("header '{0}' configured more than once")]
    DuplicateHeader(String),

    #[error("[{0}] is configured but '{0}' is not listed in layers")]
    LayerNotListed(LayerKind),

    #[error("transport.timeout_secs must be at least 1")]
    ZeroTransportTimeout,

    #[error("unknown log level '{0}'")]
    InvalidLogLevel(String),
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Check every semantic rule, collecting all failures.
pub fn validate_config(config: &PipelineConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for layer in &config.layers {
        if !seen.insert(*layer) {
            errors.push(ValidationError::DuplicateLayer(*layer));
        }
    }

    if let Some(destinations) = &config.destinations {
        if destinations.urls.is_empty() {
            errors.push(ValidationError::EmptyDestinations);
        }
        for raw in &destinations.urls {
            if let Err(e) = Url::parse(raw) {
                errors.push(ValidationError::InvalidDestination {
                    url: raw.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    let retry = &config.retry;
    if retry.enabled {
        if retry.max_attempts == 0 {
            errors.push(ValidationError::ZeroRetryAttempts);
        }
        if retry.backoff == BackoffKind::Exponential && retry.max_delay_ms < retry.delay_ms {
            errors.push(ValidationError::InvalidBackoffRange {
                delay_ms: retry.delay_ms,
                max_delay_ms: retry.max_delay_ms,
            });
        }
    }

    let configured = [
        (LayerKind::Destinations, config.destinations.is_some()),
        (LayerKind::Headers, !config.headers.is_empty()),
        (LayerKind::Auth, config.auth.is_some()),
    ];
    for (layer, present) in configured {
        if present && !config.layers.contains(&layer) {
            errors.push(ValidationError::LayerNotListed(layer));
        }
    }

    let mut header_names = HashSet::new();
    for header in &config.headers {
        if !header_names.insert(header.name.to_ascii_lowercase()) {
            errors.push(ValidationError::DuplicateHeader(header.name.clone()));
        }
        let reason = HeaderName::from_bytes(header.name.as_bytes())
            .err()
            .map(|e| e.to_string())
            .or_else(|| HeaderValue::from_str(&header.value).err().map(|e| e.to_string()));
        if let Some(reason) = reason {
            errors.push(ValidationError::InvalidHeader {
                name: header.name.clone(),
                reason,
            });
        }
    }

    if config.transport.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTransportTimeout);
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
