//! Cancelable calls.
//!
//! Every API call is an [`ApiCall`]: a future paired with a [`CancelHandle`].
//! Cancelling before the call settles drops the in-flight transport future
//! and resolves the call with [`ApiError::Cancelled`]. Cancelling afterwards
//! does nothing.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use linguaboard_core::ApiError;
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallState {
    Pending,
    Cancelled,
    Settled,
}

/// Shared handle used to cancel one call.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    state: Arc<watch::Sender<CallState>>,
}

impl Default for CancelHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelHandle {
    pub fn new() -> Self {
        let (state, _) = watch::channel(CallState::Pending);
        Self {
            state: Arc::new(state),
        }
    }

    /// Requests cancellation.
    ///
    /// Returns `true` if the call was still pending, `false` if it had
    /// already settled or been cancelled.
    pub fn cancel(&self) -> bool {
        self.transition(CallState::Cancelled)
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.state() == CallState::Cancelled
    }

    #[must_use]
    pub fn state(&self) -> CallState {
        *self.state.borrow()
    }

    /// Resolves once cancellation has been requested.
    pub async fn cancelled(&self) {
        let mut rx = self.state.subscribe();
        // The sender lives as long as `self`, so this cannot fail.
        let _ = rx.wait_for(|s| *s == CallState::Cancelled).await;
    }

    pub(crate) fn settle(&self) -> bool {
        self.transition(CallState::Settled)
    }

    fn transition(&self, to: CallState) -> bool {
        self.state.send_if_modified(|state| {
            if *state == CallState::Pending {
                *state = to;
                true
            } else {
                false
            }
        })
    }
}

type BoxedCall<T> = Pin<Box<dyn Future<Output = Result<T, ApiError>> + Send + 'static>>;

/// A pending API call.
///
/// Await it for the result; keep a [`CancelHandle`] (from
/// [`ApiCall::cancel_handle`]) to abort it from elsewhere.
#[must_use = "an ApiCall does nothing unless awaited"]
pub struct ApiCall<T> {
    future: BoxedCall<T>,
    handle: CancelHandle,
}

impl<T> std::fmt::Debug for ApiCall<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCall")
            .field("state", &self.handle.state())
            .finish_non_exhaustive()
    }
}

impl<T: Send + 'static> ApiCall<T> {
    /// Wraps `work` so that it races against cancellation of `handle`.
    ///
    /// `work` is not polled at all when cancellation was requested first.
    pub fn new<F>(handle: CancelHandle, work: F) -> Self
    where
        F: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        let guard = handle.clone();
        let future = async move {
            let result = tokio::select! {
                biased;
                _ = guard.cancelled() => Err(ApiError::Cancelled),
                result = work => result,
            };
            guard.settle();
            result
        };

        Self {
            future: Box::pin(future),
            handle,
        }
    }

    /// A call that fails immediately, used when the request cannot even be
    /// described.
    pub fn failed(error: ApiError) -> Self {
        Self::new(CancelHandle::new(), async move { Err(error) })
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.handle.clone()
    }

    pub fn cancel(&self) -> bool {
        self.handle.cancel()
    }

    /// Converts the successful output.
    pub fn map<U, F>(self, f: F) -> ApiCall<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        let ApiCall { future, handle } = self;
        ApiCall {
            future: Box::pin(async move { future.await.map(f) }),
            handle,
        }
    }
}

impl<T> Future for ApiCall<T> {
    type Output = Result<T, ApiError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.get_mut().future.as_mut().poll(cx)
    }
}
