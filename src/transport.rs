//! Base executor over `reqwest`.
//!
//! # Responsibilities
//! - Perform the actual HTTP exchange for a `Request`
//! - Buffer the response body
//! - Stop early when the call context is cancelled or expires
//!
//! # Design Decisions
//! - Connection pooling, TLS and redirects are reqwest's business
//! - Every reqwest failure becomes `ExecuteError::Transport`

use std::time::Duration;

use futures_util::future::BoxFuture;

use crate::client::{CallContext, ExecuteError, ExecuteResult, Executor, Request, Response};
use crate::config::TransportConfig;

/// Executor that sends requests with a `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestExecutor {
    client: reqwest::Client,
}

impl ReqwestExecutor {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build a client with the configured per-attempt timeout.
    pub fn from_config(config: &TransportConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::new(client))
    }
}

impl Executor for ReqwestExecutor {
    fn execute<'a>(
        &'a self,
        ctx: &'a CallContext,
        request: &'a mut Request,
    ) -> BoxFuture<'a, ExecuteResult<Response>> {
        let outgoing = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone())
            .body(request.body.clone());

        Box::pin(ctx.run(async move {
            let response = outgoing.send().await.map_err(ExecuteError::transport)?;
            let status = response.status();
            let headers = response.headers().clone();
            let body = response.bytes().await.map_err(ExecuteError::transport)?;

            tracing::debug!(status = %status, bytes = body.len(), "Response received");
            Ok(Response {
                status,
                headers,
                body,
            })
        }))
    }
}
