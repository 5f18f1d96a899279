//! API error types.

use thiserror::Error;

/// Errors that can occur when talking to the records backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the bearer token (401). Stored credentials have
    /// been cleared; the user must sign in again.
    #[error("session expired — run `flt auth login` to sign in again")]
    SessionExpired,

    /// The signed-in role may not perform this action (403).
    #[error("you do not have permission to perform this action")]
    Forbidden,

    /// The backend failed internally (5xx).
    #[error("server error ({status}) — try again later")]
    Server {
        /// HTTP status code returned by the backend.
        status: u16,
    },

    /// The backend returned a non-success status with an error envelope.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// A 2xx response whose envelope carried `success: false`.
    #[error("{message}")]
    Rejected {
        /// Message from the response envelope.
        message: String,
    },

    /// Failed to parse a backend response.
    #[error("parse error: {0}")]
    Parse(String),
}
