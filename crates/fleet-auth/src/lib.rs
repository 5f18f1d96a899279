//! # fleet-auth
//!
//! Bearer token storage and session management for the FleetOps CLI.
//!
//! Provides OS keychain token storage (`keyring`) with env-var and file
//! fallbacks, plus a pending-email cache for the sign-up OTP flow.

pub mod error;
pub mod pending;
pub mod token_store;

pub use error::AuthError;
pub use token_store::TokenSource;

/// Resolve the best available auth token.
///
/// Priority: keyring → env var → file.
#[must_use]
pub fn resolve_token() -> Option<String> {
    token_store::load()
}

/// Clear stored credentials.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn logout() -> Result<(), AuthError> {
    token_store::delete()
}
