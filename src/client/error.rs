//! Errors surfaced by executors.

use thiserror::Error;

/// Boxed error type carried by transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure of a single request execution.
///
/// Layers pass these through unchanged. The retry layer surfaces the error of
/// the last attempt as-is, so callers always see the root cause.
#[derive(Debug, Error)]
pub enum ExecuteError {
    /// The transport could not complete the exchange.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The call was cancelled through its [`CallContext`](super::CallContext).
    #[error("call cancelled")]
    Cancelled,

    /// The call's deadline passed before it completed.
    #[error("call deadline exceeded")]
    DeadlineExceeded,
}

impl ExecuteError {
    /// Wrap any error as a transport failure.
    pub fn transport(err: impl Into<BoxError>) -> Self {
        Self::Transport(err.into())
    }

    /// True for errors raised by the call context rather than the transport.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Cancelled | Self::DeadlineExceeded)
    }
}

/// Result type for executor calls.
pub type ExecuteResult<T> = Result<T, ExecuteError>;
