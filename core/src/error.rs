//! Error types for the courses API client.
//!
//! # Design
//! `NotFound` and `Unauthenticated` get dedicated variants because callers
//! branch on "the course does not exist" and "the token was missing or
//! rejected" far more often than on anything else. Other non-200 responses
//! are kept either as a parsed Google error envelope (`Api`) or as the raw
//! status and body (`Http`) when the body is not an envelope.

use serde::Deserialize;
use thiserror::Error;

/// Errors returned by `CoursesClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — the requested course does not exist.
    #[error("course not found")]
    NotFound,

    /// The server returned 401 — the bearer token was missing or rejected.
    #[error("request was not authenticated")]
    Unauthenticated,

    /// A non-200 response carrying a Google error envelope.
    #[error("API error {status} {reason}: {message}")]
    Api {
        status: u16,
        reason: String,
        message: String,
    },

    /// A non-200 response whose body is not an error envelope.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

/// Wire form of the Google error envelope: `{"error": {code, message, status}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorStatus,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorStatus {
    pub message: String,
    pub status: String,
}
