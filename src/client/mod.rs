//! Request executor abstraction.
//!
//! # Data Flow
//! ```text
//! caller
//!     → CallContext (deadline, cancellation)
//!     → Executor::execute(&ctx, &mut Request)
//!         → decorated layers (outer to inner)
//!         → base executor (transport)
//!     ← Result<Response, ExecuteError> (inner to outer)
//! ```
//!
//! # Design Decisions
//! - One method, object safe, shared as `Arc<dyn Executor>`
//! - The request is borrowed mutably for the length of one call only
//! - Any closure with the right shape is an executor via `executor_fn`

pub mod context;
pub mod error;
pub mod request;
pub mod response;

#[cfg(test)]
pub(crate) mod mock;

use std::sync::Arc;

use futures_util::future::BoxFuture;

pub use context::{CallContext, CancelToken, Canceller};
pub use error::{BoxError, ExecuteError, ExecuteResult};
pub use request::Request;
pub use response::Response;

/// Performs one request/response exchange.
pub trait Executor: Send + Sync {
    /// Execute `request`, honoring `ctx` where the implementation can.
    fn execute<'a>(
        &'a self,
        ctx: &'a CallContext,
        request: &'a mut Request,
    ) -> BoxFuture<'a, ExecuteResult<Response>>;
}

/// Executor shared between layers and callers.
pub type SharedExecutor = Arc<dyn Executor>;

impl<E: Executor + ?Sized> Executor for Arc<E> {
    fn execute<'a>(
        &'a self,
        ctx: &'a CallContext,
        request: &'a mut Request,
    ) -> BoxFuture<'a, ExecuteResult<Response>> {
        (**self).execute(ctx, request)
    }
}

/// Executor backed by a closure.
pub struct ExecutorFn<F> {
    f: F,
}

/// Turn a closure into an [`Executor`].
///
/// ```ignore
/// let ok = executor_fn(|_ctx, _req| Box::pin(async { Ok(Response::new(StatusCode::OK)) }));
/// ```
pub fn executor_fn<F>(f: F) -> ExecutorFn<F>
where
    F: for<'a> Fn(&'a CallContext, &'a mut Request) -> BoxFuture<'a, ExecuteResult<Response>>
        + Send
        + Sync,
{
    ExecutorFn { f }
}

impl<F> Executor for ExecutorFn<F>
where
    F: for<'a> Fn(&'a CallContext, &'a mut Request) -> BoxFuture<'a, ExecuteResult<Response>>
        + Send
        + Sync,
{
    fn execute<'a>(
        &'a self,
        ctx: &'a CallContext,
        request: &'a mut Request,
    ) -> BoxFuture<'a, ExecuteResult<Response>> {
        (self.f)(ctx, request)
    }
}

impl<F> std::fmt::Debug for ExecutorFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutorFn").finish_non_exhaustive()
    }
}
