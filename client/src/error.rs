//! Error types for the todo API client.
//!
//! # Design
//! `InvalidInput` and `NotFound` get dedicated variants because callers
//! distinguish "the server refused this payload" and "no such route" from
//! "the server returned an unexpected status." All other non-2xx responses
//! land in `HttpError` with the raw status code and body for debugging.

use thiserror::Error;

/// Errors returned by `TodoApi` parse methods, transports and `TodoClient`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server returned 400 and the payload was rejected.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a status other than the expected one, 400 or 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
