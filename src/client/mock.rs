//! Test doubles shared by the unit tests.

use std::sync::{Arc, Mutex};

use futures_util::future::BoxFuture;
use http::StatusCode;

use crate::client::{
    CallContext, ExecuteError, ExecuteResult, Executor, Request, Response, SharedExecutor,
};
use crate::decorator::Decorator;

/// Base executor that fails a fixed number of calls, then succeeds.
///
/// Failing call `n` (1-based) returns `transport error: attempt n failed`.
/// Every request it sees is recorded.
#[derive(Debug, Default)]
pub(crate) struct ScriptedExecutor {
    fail_first: usize,
    status: Option<StatusCode>,
    seen: Mutex<Vec<Request>>,
}

impl ScriptedExecutor {
    pub(crate) fn succeeding() -> Arc<Self> {
        Self::failing_first(0)
    }

    pub(crate) fn failing_first(fail_first: usize) -> Arc<Self> {
        Arc::new(Self {
            fail_first,
            ..Self::default()
        })
    }

    pub(crate) fn always_failing() -> Arc<Self> {
        Self::failing_first(usize::MAX)
    }

    pub(crate) fn responding(status: StatusCode) -> Arc<Self> {
        Arc::new(Self {
            status: Some(status),
            ..Self::default()
        })
    }

    pub(crate) fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub(crate) fn requests(&self) -> Vec<Request> {
        self.seen.lock().unwrap().clone()
    }
}

impl Executor for ScriptedExecutor {
    fn execute<'a>(
        &'a self,
        _ctx: &'a CallContext,
        request: &'a mut Request,
    ) -> BoxFuture<'a, ExecuteResult<Response>> {
        let call = {
            let mut seen = self.seen.lock().unwrap();
            seen.push(request.clone());
            seen.len()
        };
        let outcome = if call <= self.fail_first {
            Err(ExecuteError::transport(format!("attempt {call} failed")))
        } else {
            Ok(Response::new(self.status.unwrap_or(StatusCode::OK)).with_body(format!("call {call}")))
        };
        Box::pin(async move { outcome })
    }
}

/// Layer that drops every header before delegating.
struct ClearHeaders {
    inner: SharedExecutor,
}

impl Executor for ClearHeaders {
    fn execute<'a>(
        &'a self,
        ctx: &'a CallContext,
        request: &'a mut Request,
    ) -> BoxFuture<'a, ExecuteResult<Response>> {
        request.headers.clear();
        self.inner.execute(ctx, request)
    }
}

pub(crate) fn clear_headers() -> Decorator {
    Decorator::new("clear_headers", |inner| Arc::new(ClearHeaders { inner }))
}
