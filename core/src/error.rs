//! Error types for the APOD client.
//!
//! # Design
//! Every fetch failure is one kind of problem from the caller's point of
//! view: the record could not be loaded. The variants only keep enough
//! detail to explain why in the error banner and the logs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApodError {
    /// The configured endpoint is not an absolute URL.
    #[error("invalid endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// The request never produced a response: DNS failure, refused
    /// connection, timeout, or a body that could not be read.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body was not a JSON object with string fields.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

impl ApodError {
    /// HTTP status for `Http` errors, `None` for everything else.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApodError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
