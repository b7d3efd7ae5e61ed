//! Client Errors
//!
//! Cancellation is a tagged variant, never inferred from message text.

use std::fmt;
use thiserror::Error;

/// Why a backend call did not produce a value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request was aborted by its owning scope (view closed, request superseded)
    #[error("request cancelled")]
    Cancelled,
    #[error("{0}")]
    Failed(String),
}

impl ApiError {
    pub fn failed(message: impl Into<String>) -> Self {
        ApiError::Failed(message.into())
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }

    /// Message to show the user, or None for a cancellation
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::Cancelled => None,
            ApiError::Failed(msg) => Some(msg),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Failed(e.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Task form fields that can fail required-field validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Board,
    Priority,
    Status,
    Assignee,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormField::Title => "title",
            FormField::Description => "description",
            FormField::Board => "board",
            FormField::Priority => "priority",
            FormField::Status => "status",
            FormField::Assignee => "assignee",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<FormField>),
}

impl ValidationError {
    pub fn fields(&self) -> &[FormField] {
        match self {
            ValidationError::MissingFields(fields) => fields,
        }
    }
}

fn join_fields(fields: &[FormField]) -> String {
    fields.iter().map(|f| f.to_string()).collect::<Vec<_>>().join(", ")
}

/// Outcome of submitting the task form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Blocked locally; nothing was sent
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
}
