//! Cross-cutting error types for FleetOps.
//!
//! Domain-specific errors (`AuthError`, `ApiError`) are defined in their
//! respective crates. Everything converges on `anyhow` at the CLI boundary.

use thiserror::Error;

/// Errors that can be raised by any FleetOps crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A record payload failed client-side validation and must not be
    /// submitted to the backend.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A date string could not be parsed in any accepted format.
    #[error("Invalid date '{value}': expected YYYY-MM-DD or DD-MM-YYYY")]
    InvalidDate { value: String },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
