//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → PipelineConfig (validated, immutable)
//!     → pipeline::build (ordered decorators around a base executor)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; a new pipeline is built from a new config
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    AuthConfig, BackoffKind, DestinationsConfig, HeaderConfig, LayerKind, LoggingConfig,
    ObservabilityConfig, PipelineConfig, RetryConfig, StrategyKind, TransportConfig,
};
pub use validation::{validate_config, ValidationError};
