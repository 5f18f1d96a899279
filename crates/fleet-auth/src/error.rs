use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated — run `flt auth login`")]
    NotAuthenticated,

    #[error("session expired — run `flt auth login` to sign in again")]
    SessionExpired,

    #[error("keyring error: {0}")]
    KeyringError(String),

    #[error("token store error: {0}")]
    TokenStoreError(String),

    #[error("{0}")]
    Other(String),
}
