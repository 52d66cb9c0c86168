//! Configuration schema definitions.
//!
//! This module defines the configuration structure for a pipeline.
//! All types derive Serde traits for deserialization from config files.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Root configuration for a decorated client pipeline.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Composition order, innermost first. Layers whose section is absent or
    /// disabled are skipped.
    pub layers: Vec<LayerKind>,

    /// Request logging.
    pub logging: LoggingConfig,

    /// Fixed headers set on every request.
    pub headers: Vec<HeaderConfig>,

    /// Basic-Auth credentials.
    pub auth: Option<AuthConfig>,

    /// Destination selection.
    pub destinations: Option<DestinationsConfig>,

    /// Retry settings.
    pub retry: RetryConfig,

    /// Base transport settings.
    pub transport: TransportConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            layers: default_layers(),
            logging: LoggingConfig::default(),
            headers: Vec::new(),
            auth: None,
            destinations: None,
            retry: RetryConfig::default(),
            transport: TransportConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Logging, destination selection, headers, auth, then retry outermost.
pub fn default_layers() -> Vec<LayerKind> {
    vec![
        LayerKind::Logging,
        LayerKind::Destinations,
        LayerKind::Headers,
        LayerKind::Auth,
        LayerKind::Retry,
    ]
}

/// A layer that can be placed in the composition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Logging,
    Destinations,
    Headers,
    Auth,
    Retry,
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LayerKind::Logging => "logging",
            LayerKind::Destinations => "destinations",
            LayerKind::Headers => "headers",
            LayerKind::Auth => "auth",
            LayerKind::Retry => "retry",
        };
        f.write_str(name)
    }
}

/// Request logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,

    /// Include request bodies.
    pub verbose: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            verbose: false,
        }
    }
}

/// A header set on every request. Names are unique within a config.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HeaderConfig {
    pub name: String,
    pub value: String,
}

/// Basic-Auth credentials.
#[derive(Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Destination selection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DestinationsConfig {
    /// Selection strategy (default: random).
    #[serde(default)]
    pub strategy: StrategyKind,

    /// Candidate targets, as absolute URLs.
    pub urls: Vec<String>,

    /// Seed for the random strategy; entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Built-in selection strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    #[default]
    Random,
    RoundRobin,
}

/// Retry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Enable retries.
    pub enabled: bool,

    /// Maximum number of attempts, including the first.
    pub max_attempts: u32,

    /// Delay between attempts in milliseconds (base delay for exponential).
    pub delay_ms: u64,

    /// Delay schedule.
    pub backoff: BackoffKind,

    /// Cap for exponential backoff in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_attempts: 3,
            delay_ms: 100,
            backoff: BackoffKind::Fixed,
            max_delay_ms: 2000,
        }
    }
}

/// Delay schedule between retry attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffKind {
    #[default]
    Fixed,
    Exponential,
}

/// Base transport configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Per-attempt timeout in seconds; at least 1.
    pub timeout_secs: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
