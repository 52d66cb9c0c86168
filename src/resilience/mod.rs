//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Call enters the retry layer
//!     → inner executor (attempt n)
//!     → Ok: return immediately
//!     → Err: log, count, then if attempts remain:
//!         backoff.rs (delay for attempt n)
//!         → CallContext::sleep (wakes early on cancel/deadline)
//!         → attempt n + 1
//!     → exhausted: the last attempt's error, unchanged
//! ```
//!
//! # Design Decisions
//! - Only executor errors trigger a retry; status codes are the caller's call
//! - No state survives between calls; the attempt counter lives on the stack
//! - Interrupting a wait surfaces the last real error, not the interruption

pub mod backoff;
pub mod retries;

pub use backoff::Backoff;
pub use retries::{retry, retry_with_backoff, retry_with_policy, RetryPolicy};
