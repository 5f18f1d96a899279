//! Bearer token persistence.
//!
//! Tokens live in the OS keychain when one is available. Two fallback tiers
//! cover headless machines and CI: the `FLEETOPS_AUTH__TOKEN` environment
//! variable, and a `~/.fleetops/credentials` file kept at user-only
//! permissions. Lookups walk the tiers in that order; `flt auth status`
//! reports which tier answered via [`TokenSource`].

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;

const DEFAULT_SERVICE: &str = "fleetops-cli";
const KEYCHAIN_ACCOUNT: &str = "access-token";
const TOKEN_ENV_VAR: &str = "FLEETOPS_AUTH__TOKEN";

/// Which tier produced the current token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Keyring,
    Env,
    File,
}

impl TokenSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
        }
    }
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persist a fresh token after sign-in.
///
/// Prefers the keychain; a machine without one gets the credentials file.
///
/// # Errors
///
/// Returns [`AuthError::TokenStoreError`] when the keychain is unavailable
/// and the credentials file cannot be written either.
pub fn store(token: &str) -> Result<(), AuthError> {
    match keychain_entry().and_then(|entry| entry.set_password(token)) {
        Ok(()) => Ok(()),
        Err(error) => {
            tracing::warn!(%error, "keychain rejected the token; writing credentials file");
            let path = credentials_path()?;
            write_token_file(&path, token)
        }
    }
}

/// The stored token, if any tier has one.
#[must_use]
pub fn load() -> Option<String> {
    lookup().map(|(token, _)| token)
}

/// The tier the current token comes from.
#[must_use]
pub fn source() -> Option<TokenSource> {
    lookup().map(|(_, source)| source)
}

/// Remove the token from every tier that persists one. The env tier is the
/// caller's to unset.
///
/// # Errors
///
/// Returns [`AuthError::TokenStoreError`] when the credentials file exists
/// but cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    if let Ok(entry) = keychain_entry() {
        // A missing keychain entry is not a failed logout.
        let _ = entry.delete_credential();
    }

    let path = credentials_path()?;
    remove_if_present(&path)
}

fn lookup() -> Option<(String, TokenSource)> {
    if let Some(token) = keychain_token() {
        return Some((token, TokenSource::Keyring));
    }

    if let Some(token) = non_blank(std::env::var(TOKEN_ENV_VAR).ok()) {
        return Some((token, TokenSource::Env));
    }

    let path = credentials_path().ok()?;
    read_token_file(&path).map(|token| (token, TokenSource::File))
}

/// Keychain service name, overridable through `FLEETOPS_KEYRING_SERVICE` so
/// test runs stay away from the real entry.
fn service_name() -> String {
    std::env::var("FLEETOPS_KEYRING_SERVICE").unwrap_or_else(|_| DEFAULT_SERVICE.to_string())
}

fn keychain_entry() -> Result<keyring::Entry, keyring::Error> {
    keyring::Entry::new(&service_name(), KEYCHAIN_ACCOUNT)
}

fn keychain_token() -> Option<String> {
    let entry = keychain_entry().ok()?;
    non_blank(entry.get_password().ok())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn credentials_path() -> Result<PathBuf, AuthError> {
    let home = dirs::home_dir().ok_or_else(|| {
        AuthError::TokenStoreError("cannot locate a home directory for ~/.fleetops/credentials".into())
    })?;
    Ok(home.join(".fleetops").join("credentials"))
}

fn write_token_file(path: &Path, token: &str) -> Result<(), AuthError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .map_err(|e| AuthError::TokenStoreError(format!("mkdir {}: {e}", dir.display())))?;
        restrict_permissions(dir, 0o700)?;
    }

    fs::write(path, token)
        .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;
    restrict_permissions(path, 0o600)
}

/// Trailing whitespace is stripped so a hand-edited file with a newline does
/// not corrupt the bearer header.
fn read_token_file(path: &Path) -> Option<String> {
    non_blank(fs::read_to_string(path).ok()).map(|token| token.trim().to_string())
}

fn remove_if_present(path: &Path) -> Result<(), AuthError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(AuthError::TokenStoreError(format!(
            "failed to remove {}: {error}",
            path.display()
        ))),
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path, mode: u32) -> Result<(), AuthError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
        .map_err(|e| AuthError::TokenStoreError(format!("chmod {}: {e}", path.display())))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path, _mode: u32) -> Result<(), AuthError> {
    Ok(())
}
