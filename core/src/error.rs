//! Error types for the Unsplash client.
//!
//! # Design
//! Argument problems are caught locally, before any request leaves the
//! process, and get their own variant so callers can tell "fix your input"
//! apart from "the server said no." Everything the HTTP exchange reports is
//! carried through as-is: non-2xx responses keep their status and raw body,
//! network failures keep the underlying `reqwest::Error`.

use thiserror::Error;

/// Errors returned by `UnsplashClient` construction and `PhotoQuery` calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The client configuration is unusable (e.g. empty access key).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A required argument was empty or an option held an unsupported value.
    /// Raised before any network call.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never produced a response (connect failure, timeout, ...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be deserialized into the requested type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

impl ApiError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        ApiError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Whether this error was raised locally, before touching the network.
    pub fn is_argument_error(&self) -> bool {
        matches!(self, ApiError::InvalidArgument { .. })
    }
}
