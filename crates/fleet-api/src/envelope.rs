//! Response envelope shared by every backend endpoint.
//!
//! The backend wraps all payloads as `{ "success": bool, "data": ...,
//! "message": "..." }`. Callers unwrap `data` for reads and writes, and
//! `message` for fire-and-forget operations like delete or OTP resend.

use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwrap the payload, turning `success: false` into [`ApiError::Rejected`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when the envelope reports failure, or
    /// [`ApiError::Parse`] when a successful envelope has no `data` field.
    pub fn into_data(self) -> Result<T, ApiError> {
        if self.success {
            self.data
                .ok_or_else(|| ApiError::Parse("response envelope missing data".into()))
        } else {
            Err(ApiError::Rejected {
                message: self
                    .message
                    .unwrap_or_else(|| "request failed".to_string()),
            })
        }
    }

    /// Unwrap the human-readable message, ignoring any payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when the envelope reports failure.
    pub fn into_message(self) -> Result<String, ApiError> {
        if self.success {
            Ok(self.message.unwrap_or_default())
        } else {
            Err(ApiError::Rejected {
                message: self
                    .message
                    .unwrap_or_else(|| "request failed".to_string()),
            })
        }
    }
}
