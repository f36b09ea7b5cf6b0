//! Named task handles for GitHub operations.
//!
//! Each operation runs on its own tokio task and reports back over a oneshot
//! channel. If the task dies first (panic, runtime shutdown) the handle resolves
//! to [`TaskDropped`] carrying the operation name, so the failure says which
//! request never completed.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use thiserror::Error;
use tokio::sync::oneshot;

/// The task behind an [`AsyncTask`] ended without sending its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{operation} task ended without a result")]
pub struct TaskDropped {
    pub operation: &'static str,
}

/// Handle to a spawned operation producing a single value.
pub struct AsyncTask<T> {
    operation: &'static str,
    rx: oneshot::Receiver<T>,
}

impl<T> AsyncTask<T>
where
    T: Send + 'static,
{
    /// Run `future` on the current tokio runtime under `operation`.
    pub fn spawn<F>(operation: &'static str, future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let _ = tx.send(future.await);
        });
        Self::from_receiver(operation, rx)
    }

    /// Wrap a receiver fed by some other producer.
    #[must_use]
    pub fn from_receiver(operation: &'static str, rx: oneshot::Receiver<T>) -> Self {
        Self { operation, rx }
    }
}

impl<T> AsyncTask<T> {
    #[must_use]
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

impl<T> Future for AsyncTask<T> {
    type Output = Result<T, TaskDropped>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let operation = self.operation;
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|received| received.map_err(|_| TaskDropped { operation }))
    }
}
