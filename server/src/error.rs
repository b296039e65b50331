//! Error type for store operations.
//!
//! # Design
//! Every failure a handler can hit maps directly onto an HTTP response, so
//! `StoreError` implements `IntoResponse` and handlers propagate it with
//! `Result`. Bodies are plain text, matching the wire contract: errors are
//! terminal for the request and carry no structured payload.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors returned by `TodoStore` mutations and lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// The requested id matches no stored todo.
    NotFound,

    /// Update or delete attempted while the store holds zero entries.
    /// Checked before the id lookup, so it wins over `NotFound`.
    Empty,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound => write!(f, "todo not found"),
            StoreError::Empty => write!(f, "todo store is empty"),
        }
    }
}

impl std::error::Error for StoreError {}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        match self {
            StoreError::NotFound => (StatusCode::NOT_FOUND, "Not Found").into_response(),
            StoreError::Empty => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Todos is empty").into_response()
            }
        }
    }
}
