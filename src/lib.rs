//! Composable outbound HTTP client pipeline.
//!
//! A base [`Executor`](client::Executor) is wrapped by an ordered chain of
//! [`Decorator`](decorator::Decorator)s. Built-in layers cover request
//! logging, header injection, Basic-Auth, destination selection and retry.
//!
//! ```text
//!   caller ──▶ retry ──▶ auth ──▶ headers ──▶ destinations ──▶ logging ──▶ transport
//!          ◀──────────────────────── response / error ◀──────────────────────
//! ```
//!
//! The decorator listed first wraps the base executor directly; the last one
//! sees the request first.

pub mod client;
pub mod config;
pub mod decorator;
pub mod load_balancer;
pub mod observability;
pub mod pipeline;
pub mod resilience;
pub mod transport;

pub use client::{CallContext, Canceller, ExecuteError, Executor, Request, Response, SharedExecutor};
pub use config::PipelineConfig;
pub use decorator::{decorate, BuildError, Decorator, DecoratorChain};
pub use transport::ReqwestExecutor;
