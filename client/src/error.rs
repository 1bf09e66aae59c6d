//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` and `InvalidInput` get dedicated variants because callers
//! branch on them: the first means the resource does not exist, the second
//! carries the server's validation message for display. Every other non-2xx
//! status lands in `Http` with the raw status code and body for debugging.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — the requested todo does not exist.
    #[error("todo not found")]
    NotFound,

    /// The server returned 400 — the request failed validation. Carries the
    /// server's error message.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The server returned a non-2xx status other than 404 or 400.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("malformed response body: {0}")]
    Body(String),

    /// The request payload could not be serialized to JSON.
    #[error("could not encode request body: {0}")]
    Encode(String),
}
