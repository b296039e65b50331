//! Synchronous API client for the todo service.
//!
//! # Overview
//! One method per route, executed directly over HTTP with `ureq`. Status
//! interpretation lives in the client: 404 becomes `ApiError::NotFound`,
//! every other non-2xx lands in `ApiError::HttpError` with the raw status
//! and body.
//!
//! # Design
//! - `TodoClient` holds a `ureq::Agent` and a `base_url`; no other state.
//! - DTOs are defined independently from the server crate; the integration
//!   test catches schema drift.
//! - The server wraps list and get responses in `todos` / `toDo` envelopes
//!   and answers mutations with plain-text bodies; the client unwraps both
//!   so callers only see domain types.

pub mod client;
pub mod error;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use types::{CreateTodo, Todo, UpdateTodo};
