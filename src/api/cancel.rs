//! Request Cancellation
//!
//! A `RequestScope` is tied to the lifetime of whatever issued the requests
//! (a page view, a modal). Cancelling it aborts everything still in flight.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use futures::future::{AbortHandle, Abortable};

use crate::error::{ApiError, ApiResult};

#[derive(Default)]
struct ScopeInner {
    cancelled: AtomicBool,
    next_id: AtomicU64,
    in_flight: Mutex<HashMap<u64, AbortHandle>>,
}

impl ScopeInner {
    fn abort_all(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        if let Ok(mut in_flight) = self.in_flight.lock() {
            for (_, handle) in in_flight.drain() {
                handle.abort();
            }
        }
    }
}

impl Drop for ScopeInner {
    fn drop(&mut self) {
        self.abort_all();
    }
}

/// Cloneable cancellation owner for a group of requests
#[derive(Clone, Default)]
pub struct RequestScope {
    inner: Arc<ScopeInner>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `request` under this scope. Resolves to `ApiError::Cancelled`
    /// if the scope is (or gets) cancelled before the request finishes.
    pub async fn run<T, F>(&self, request: F) -> ApiResult<T>
    where
        F: Future<Output = ApiResult<T>>,
    {
        if self.is_cancelled() {
            return Err(ApiError::Cancelled);
        }

        let (handle, registration) = AbortHandle::new_pair();
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut in_flight) = self.inner.in_flight.lock() {
            in_flight.insert(id, handle);
        }

        let outcome = Abortable::new(request, registration).await;

        if let Ok(mut in_flight) = self.inner.in_flight.lock() {
            in_flight.remove(&id);
        }

        match outcome {
            Ok(result) => result,
            Err(_aborted) => Err(ApiError::Cancelled),
        }
    }

    /// Abort every in-flight request; later `run` calls resolve as cancelled.
    pub fn cancel(&self) {
        self.inner.abort_all();
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    pub fn in_flight(&self) -> usize {
        self.inner.in_flight.lock().map(|m| m.len()).unwrap_or(0)
    }
}
