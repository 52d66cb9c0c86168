//! Request logging layer.
//!
//! # Responsibilities
//! - Hand each outgoing request to a [`RequestLogger`] before delegating
//! - Return the inner result untouched
//!
//! # Design Decisions
//! - Built-in loggers emit `tracing` events, which cannot fail; a logger
//!   has no way to change the request's outcome
//! - Standard records method and target, verbose adds the body

use std::sync::Arc;

use futures_util::future::BoxFuture;

use crate::client::{CallContext, ExecuteResult, Executor, Request, Response, SharedExecutor};
use crate::decorator::Decorator;

/// Records an outgoing request as a side effect.
pub trait RequestLogger: Send + Sync {
    fn log(&self, request: &Request);
}

impl<F> RequestLogger for F
where
    F: Fn(&Request) + Send + Sync,
{
    fn log(&self, request: &Request) {
        self(request)
    }
}

/// Logs method and target at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardLogger;

impl RequestLogger for StandardLogger {
    fn log(&self, request: &Request) {
        tracing::info!(
            method = %request.method,
            url = %request.url,
            "Outgoing request"
        );
    }
}

/// Logs method, target and body at `info`.
///
/// Bodies are decoded lossily as UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerboseLogger;

impl RequestLogger for VerboseLogger {
    fn log(&self, request: &Request) {
        tracing::info!(
            method = %request.method,
            url = %request.url,
            body = %String::from_utf8_lossy(&request.body),
            "Outgoing request"
        );
    }
}

struct Logging {
    inner: SharedExecutor,
    logger: Arc<dyn RequestLogger>,
}

impl Executor for Logging {
    fn execute<'a>(
        &'a self,
        ctx: &'a CallContext,
        request: &'a mut Request,
    ) -> BoxFuture<'a, ExecuteResult<Response>> {
        self.logger.log(request);
        self.inner.execute(ctx, request)
    }
}

/// Decorator that logs every request passing through it.
pub fn logging<L>(logger: L) -> Decorator
where
    L: RequestLogger + 'static,
{
    let logger: Arc<dyn RequestLogger> = Arc::new(logger);
    Decorator::new("logging", move |inner| {
        Arc::new(Logging {
            inner,
            logger: logger.clone(),
        })
    })
}
