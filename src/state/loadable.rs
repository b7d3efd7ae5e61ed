//! Per-resource fetch slot
//!
//! Each resource (tasks, users, boards, current-board tasks) loads and fails
//! on its own, so each carries its own data/loading/error triple.

use crate::error::{ApiError, ApiResult};

/// Identifies one request against a slot; only the newest one may settle it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Loadable<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
    latest: u64,
}

impl<T: Default> Loadable<T> {
    pub fn new(data: T) -> Self {
        Self { data, loading: false, error: None, latest: 0 }
    }

    /// Mark a request as started: loading on, previous error cleared.
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        self.loading = true;
        self.error = None;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    /// Store fetched data. Returns false when a newer request owns the slot.
    pub fn resolve(&mut self, ticket: Ticket, data: T) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        self.data = data;
        true
    }

    /// Record a failure. A cancellation never touches `error` or `data`.
    pub fn reject(&mut self, ticket: Ticket, err: &ApiError, fallback: &str) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        if let ApiError::Failed(message) = err {
            let message = if message.trim().is_empty() { fallback } else { message.as_str() };
            self.error = Some(message.to_string());
        }
        true
    }

    pub fn settle(&mut self, ticket: Ticket, result: ApiResult<T>, fallback: &str) -> bool {
        match result {
            Ok(data) => self.resolve(ticket, data),
            Err(err) => self.reject(ticket, &err, fallback),
        }
    }

    /// Back to empty; any request still in flight can no longer settle the slot.
    pub fn reset(&mut self) {
        self.latest += 1;
        self.data = T::default();
        self.loading = false;
        self.error = None;
    }
}
