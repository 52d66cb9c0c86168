//! Per-call deadline and cancellation.
//!
//! # Responsibilities
//! - Carry an optional deadline and cancellation token through `execute`
//! - Provide a sleep that wakes early on cancellation or deadline
//! - Race transport futures against the same signals
//!
//! # Design Decisions
//! - Cancellation is level-triggered (`watch`), so tokens created after
//!   `cancel()` still observe it
//! - An empty context never interrupts anything

use std::future::{pending, Future};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{self, Instant};

use crate::client::error::ExecuteError;

/// Owner side of a cancellation signal.
///
/// Hand out [`CancelToken`]s to calls, then call [`Canceller::cancel`] to
/// interrupt all of them.
#[derive(Debug)]
pub struct Canceller {
    tx: watch::Sender<bool>,
}

impl Canceller {
    /// Create a new, untriggered canceller.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    /// Create a token observing this canceller.
    pub fn token(&self) -> CancelToken {
        CancelToken {
            rx: self.tx.subscribe(),
        }
    }

    /// Trigger cancellation for every token.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    /// Whether `cancel` has been called.
    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Default for Canceller {
    fn default() -> Self {
        Self::new()
    }
}

/// Observer side of a cancellation signal.
#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once cancelled. Never resolves if the canceller is dropped
    /// without cancelling.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        if rx.wait_for(|cancelled| *cancelled).await.is_err() {
            pending::<()>().await;
        }
    }
}

/// Context threaded through every [`Executor::execute`](super::Executor::execute) call.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    deadline: Option<Instant>,
    cancel: Option<CancelToken>,
}

impl CallContext {
    /// A context without deadline or cancellation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an absolute deadline.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set a deadline relative to now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Attach a cancellation token.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }

    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Returns the interruption that already applies, if any.
    pub fn check(&self) -> Result<(), ExecuteError> {
        if self.is_cancelled() {
            return Err(ExecuteError::Cancelled);
        }
        if self.is_expired() {
            return Err(ExecuteError::DeadlineExceeded);
        }
        Ok(())
    }

    /// Resolves with the first interruption to fire.
    async fn interrupted(&self) -> ExecuteError {
        let cancelled = async {
            match &self.cancel {
                Some(token) => token.cancelled().await,
                None => pending().await,
            }
        };
        let expired = async {
            match self.deadline {
                Some(deadline) => time::sleep_until(deadline).await,
                None => pending().await,
            }
        };

        tokio::select! {
            _ = cancelled => ExecuteError::Cancelled,
            _ = expired => ExecuteError::DeadlineExceeded,
        }
    }

    /// Wait for `duration` unless the call is interrupted first.
    pub async fn sleep(&self, duration: Duration) -> Result<(), ExecuteError> {
        self.check()?;
        tokio::select! {
            biased;
            err = self.interrupted() => Err(err),
            _ = time::sleep(duration) => Ok(()),
        }
    }

    /// Drive `call` to completion unless the call is interrupted first.
    pub async fn run<T, F>(&self, call: F) -> Result<T, ExecuteError>
    where
        F: Future<Output = Result<T, ExecuteError>>,
    {
        self.check()?;
        tokio::select! {
            biased;
            err = self.interrupted() => Err(err),
            result = call => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_sleep_runs_to_completion() {
        let ctx = CallContext::new();
        let start = Instant::now();
        ctx.sleep(Duration::from_secs(2)).await.unwrap();
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(2) && elapsed < Duration::from_millis(2010));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sleep_stops_at_deadline() {
        let ctx = CallContext::new().with_timeout(Duration::from_millis(500));
        let start = Instant::now();
        let err = ctx.sleep(Duration::from_secs(10)).await.unwrap_err();
        assert!(matches!(err, ExecuteError::DeadlineExceeded));
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(500) && elapsed < Duration::from_millis(510));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_wakes_sleeper() {
        let canceller = Canceller::new();
        let ctx = CallContext::new().with_cancel(canceller.token());

        let sleeper = tokio::spawn(async move { ctx.sleep(Duration::from_secs(60)).await });
        time::sleep(Duration::from_secs(1)).await;
        canceller.cancel();

        let err = sleeper.await.unwrap().unwrap_err();
        assert!(matches!(err, ExecuteError::Cancelled));
    }

    #[tokio::test]
    async fn test_token_created_after_cancel_is_cancelled() {
        let canceller = Canceller::new();
        canceller.cancel();
        let ctx = CallContext::new().with_cancel(canceller.token());
        assert!(canceller.is_cancelled());
        assert!(matches!(ctx.check(), Err(ExecuteError::Cancelled)));
        let err = ctx.run(async { Ok::<_, ExecuteError>(1) }).await.unwrap_err();
        assert!(matches!(err, ExecuteError::Cancelled));
    }

    #[tokio::test]
    async fn test_dropped_canceller_never_fires() {
        let canceller = Canceller::new();
        let ctx = CallContext::new().with_cancel(canceller.token());
        drop(canceller);
        assert!(!ctx.is_cancelled());
        assert_eq!(ctx.run(async { Ok::<_, ExecuteError>(7) }).await.unwrap(), 7);
    }
}
