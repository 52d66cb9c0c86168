//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Layers produce:
//!     → logging.rs (structured `tracing` events)
//!     → metrics.rs (attempt and retry counters)
//!
//! Consumers:
//!     → whatever subscriber the host installs (the CLI uses fmt + EnvFilter)
//!     → whatever `metrics` recorder the host installs (none by default)
//! ```
//!
//! # Design Decisions
//! - The library only emits; installing subscribers/recorders is the host's job
//! - Metrics are cheap no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
