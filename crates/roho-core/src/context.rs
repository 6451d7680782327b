//! Cancellation and deadline propagation for API calls.
//!
//! A [`Context`] is handed to every network call. When it is cancelled or its
//! deadline passes, [`Context::run`] drops the wrapped future, which aborts an
//! in-flight HTTP request instead of waiting for the response.

use std::future::Future;
use std::time::Duration;

use futures::future::select_all;
use tokio::sync::watch;
use tokio::time::Instant;

use crate::error::ContextError;

/// Cancellation/deadline scope for one logical call chain.
#[derive(Debug, Clone, Default)]
pub struct Context {
    signals: Vec<watch::Receiver<bool>>,
    deadline: Option<Instant>,
}

/// Cancels the [`Context`] it was created with, and every context derived from it.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

impl Context {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// Derive a child context that can be cancelled independently.
    pub fn with_cancel(&self) -> (Self, CancelHandle) {
        let (tx, rx) = watch::channel(false);
        let mut child = self.clone();
        child.signals.push(rx);
        (child, CancelHandle { tx })
    }

    /// Derive a child context that expires after `timeout`.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Derive a child context with the given deadline. The earlier of the
    /// parent's and the child's deadline wins.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        let deadline = match self.deadline {
            Some(current) if current <= deadline => current,
            _ => deadline,
        };
        Self {
            signals: self.signals.clone(),
            deadline: Some(deadline),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.signals.iter().any(|rx| *rx.borrow())
    }

    /// Current state of the context, if it is no longer live.
    pub fn err(&self) -> Option<ContextError> {
        if self.is_cancelled() {
            Some(ContextError::Cancelled)
        } else if self.deadline.is_some_and(|d| d <= Instant::now()) {
            Some(ContextError::DeadlineExceeded)
        } else {
            None
        }
    }

    /// Resolves once any cancellation signal fires. Never resolves for a
    /// context without signals.
    pub async fn cancelled(&self) {
        if self.signals.is_empty() {
            return std::future::pending().await;
        }

        let waits = self.signals.iter().cloned().map(|mut rx| {
            Box::pin(async move {
                loop {
                    if *rx.borrow_and_update() {
                        return;
                    }
                    if rx.changed().await.is_err() {
                        // Handle dropped without cancelling.
                        std::future::pending::<()>().await;
                    }
                }
            })
        });
        select_all(waits).await;
    }

    /// Drive `fut` to completion unless the context is cancelled or expires first.
    pub async fn run<F>(&self, fut: F) -> Result<F::Output, ContextError>
    where
        F: Future,
    {
        if let Some(err) = self.err() {
            return Err(err);
        }

        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancelled() => Err(ContextError::Cancelled),
            _ = expired => Err(ContextError::DeadlineExceeded),
            out = fut => Ok(out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_background_runs_to_completion() {
        let ctx = Context::background();
        assert_eq!(ctx.run(async { 42 }).await, Ok(42));
        assert!(ctx.err().is_none());
    }

    #[tokio::test]
    async fn test_cancel_aborts_pending_future() {
        let (ctx, handle) = Context::background().with_cancel();

        let canceller = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            handle.cancel();
        });

        let started = std::time::Instant::now();
        let result = ctx.run(std::future::pending::<()>()).await;
        canceller.await.unwrap();

        assert_eq!(result, Err(ContextError::Cancelled));
        assert!(started.elapsed() < Duration::from_secs(5));
        assert!(ctx.is_cancelled());
    }

    #[tokio::test]
    async fn test_child_inherits_parent_cancellation() {
        let (parent, handle) = Context::background().with_cancel();
        let (child, _child_handle) = parent.with_cancel();

        handle.cancel();

        assert!(child.is_cancelled());
        assert_eq!(child.run(async { 1 }).await, Err(ContextError::Cancelled));
    }

    #[tokio::test]
    async fn test_deadline_exceeded() {
        let ctx = Context::background().with_timeout(Duration::from_millis(10));
        let result = ctx.run(std::future::pending::<()>()).await;
        assert_eq!(result, Err(ContextError::DeadlineExceeded));
    }

    #[tokio::test]
    async fn test_earlier_deadline_wins() {
        let parent = Context::background().with_timeout(Duration::from_millis(10));
        let child = parent.with_timeout(Duration::from_secs(60));
        assert_eq!(child.deadline(), parent.deadline());
    }

    #[tokio::test]
    async fn test_dropped_handle_does_not_cancel() {
        let (ctx, handle) = Context::background().with_cancel();
        drop(handle);
        assert_eq!(ctx.run(async { "done" }).await, Ok("done"));
    }
}
