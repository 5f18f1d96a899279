//! Pending sign-up email cache.
//!
//! After `flt auth register`, the account's email is remembered so the
//! follow-up `verify-otp` / `resend-otp` commands can run without the user
//! retyping it. Cleared once OTP verification succeeds.
//!
//! The public functions pin the cache to `~/.fleetops/pending_email`; the
//! path-taking internals carry the actual read/write behavior.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;

const PENDING_EMAIL_FILE_NAME: &str = "pending_email";

fn pending_email_path() -> Result<PathBuf, AuthError> {
    dirs::home_dir()
        .map(|h| h.join(".fleetops").join(PENDING_EMAIL_FILE_NAME))
        .ok_or_else(|| {
            AuthError::TokenStoreError("home directory not found — cannot cache email".into())
        })
}

/// Remember the email awaiting OTP verification.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the cache file cannot be written.
pub fn store_email(email: &str) -> Result<(), AuthError> {
    write_cache(&pending_email_path()?, email)
}

/// Email from the last unverified sign-up, if any.
#[must_use]
pub fn load_email() -> Option<String> {
    read_cache(&pending_email_path().ok()?)
}

/// Clear the cached email after successful verification.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the cache file cannot be removed.
pub fn clear_email() -> Result<(), AuthError> {
    clear_cache(&pending_email_path()?)
}

fn write_cache(path: &Path, email: &str) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display())))?;
    }
    fs::write(path, email)
        .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))
}

fn read_cache(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn clear_cache(path: &Path) -> Result<(), AuthError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(AuthError::TokenStoreError(format!(
            "failed to delete {}: {error}",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_email_path_is_under_home() {
        let path = pending_email_path().expect("should resolve");
        assert!(path.ends_with(".fleetops/pending_email"));
    }

    #[test]
    fn cache_round_trips_through_a_fresh_directory() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("cache").join("pending_email");

        write_cache(&path, "driver@example.com").expect("write should work");
        assert_eq!(read_cache(&path).as_deref(), Some("driver@example.com"));

        clear_cache(&path).expect("clear should work");
        assert_eq!(read_cache(&path), None);
    }

    #[test]
    fn trims_whitespace_on_load() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("pending_email");
        std::fs::write(&path, "  driver@example.com\n").expect("write");

        assert_eq!(read_cache(&path).as_deref(), Some("driver@example.com"));
    }

    #[test]
    fn blank_cache_loads_as_absent() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("pending_email");
        std::fs::write(&path, "  \n").expect("write");

        assert_eq!(read_cache(&path), None);
    }

    #[test]
    fn clearing_a_missing_cache_is_not_an_error() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        assert!(clear_cache(&tmp.path().join("pending_email")).is_ok());
    }
}
