//! Retry layer.
//!
//! # Responsibilities
//! - Re-run the inner executor on error, up to a fixed number of attempts
//! - Wait between attempts without blocking the runtime
//! - Surface the final attempt's outcome verbatim
//!
//! # Design Decisions
//! - A response with any status is a success here
//! - The same `Request` is handed to every attempt; inner layers run again
//! - No wait follows the last attempt

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::BoxFuture;

use crate::client::{CallContext, ExecuteResult, Executor, Request, Response, SharedExecutor};
use crate::decorator::{BuildError, Decorator};
use crate::observability::metrics;
use crate::resilience::Backoff;

/// Attempt budget and delay schedule, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    attempts: u32,
    backoff: Backoff,
}

impl RetryPolicy {
    /// `attempts` counts the first try; it must be at least 1.
    pub fn new(attempts: u32, backoff: Backoff) -> Result<Self, BuildError> {
        if attempts == 0 {
            return Err(BuildError::ZeroAttempts);
        }
        Ok(Self { attempts, backoff })
    }

    pub fn fixed(attempts: u32, delay: Duration) -> Result<Self, BuildError> {
        Self::new(attempts, Backoff::Fixed(delay))
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn backoff(&self) -> Backoff {
        self.backoff
    }
}

struct Retry {
    inner: SharedExecutor,
    policy: RetryPolicy,
}

impl Executor for Retry {
    fn execute<'a>(
        &'a self,
        ctx: &'a CallContext,
        request: &'a mut Request,
    ) -> BoxFuture<'a, ExecuteResult<Response>> {
        Box::pin(async move {
            let mut remaining = self.policy.attempts;
            let mut attempt = 0;

            loop {
                attempt += 1;
                let err = match self.inner.execute(ctx, request).await {
                    Ok(response) => {
                        metrics::record_attempt(true);
                        return Ok(response);
                    }
                    Err(err) => err,
                };
                metrics::record_attempt(false);
                remaining -= 1;

                if remaining == 0 {
                    tracing::warn!(attempts = attempt, error = %err, "Retries exhausted");
                    metrics::record_exhausted();
                    return Err(err);
                }

                let delay = self.policy.backoff.delay(attempt);
                tracing::warn!(
                    attempt,
                    remaining,
                    delay = ?delay,
                    error = %err,
                    "Request failed, retrying"
                );

                if let Err(interrupt) = ctx.sleep(delay).await {
                    tracing::warn!(attempt, reason = %interrupt, "Retry wait interrupted");
                    return Err(err);
                }
                metrics::record_retry();
            }
        })
    }
}

/// Decorator retrying up to `attempts` times with a fixed `delay` between.
pub fn retry(attempts: u32, delay: Duration) -> Result<Decorator, BuildError> {
    Ok(retry_with_policy(RetryPolicy::fixed(attempts, delay)?))
}

/// Decorator retrying up to `attempts` times on the given backoff schedule.
pub fn retry_with_backoff(attempts: u32, backoff: Backoff) -> Result<Decorator, BuildError> {
    Ok(retry_with_policy(RetryPolicy::new(attempts, backoff)?))
}

pub fn retry_with_policy(policy: RetryPolicy) -> Decorator {
    Decorator::new("retry", move |inner| Arc::new(Retry { inner, policy }))
}
