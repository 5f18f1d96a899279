//! Authentication endpoints: sign-in, sign-up, OTP verification, session lookup.

use serde::Deserialize;

use fleet_core::entities::user::{Credentials, OtpVerification, SignUp, User};

use crate::{ApiClient, error::ApiError};

/// Bearer token material returned by sign-in.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPayload {
    pub access_token: String,
}

/// Payload of a successful sign-in: the token plus the signed-in user.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub token: TokenPayload,
    pub user: User,
}

#[derive(serde::Serialize)]
struct EmailOnly<'a> {
    email: &'a str,
}

impl ApiClient {
    /// Sign in with email and password.
    ///
    /// On success the caller is responsible for persisting
    /// `session.token.access_token` via `fleet_auth::token_store::store`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects the
    /// credentials.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        self.post_data("/auth/sign_in", credentials).await
    }

    /// Register a new account. The backend emails an OTP to the given address.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects the
    /// registration.
    pub async fn sign_up(&self, payload: &SignUp) -> Result<String, ApiError> {
        self.post_message("/auth/sign_up", payload).await
    }

    /// Verify the OTP emailed during sign-up.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the code is wrong or
    /// expired.
    pub async fn verify_otp(&self, payload: &OtpVerification) -> Result<String, ApiError> {
        self.post_message("/auth/verify_otp", payload).await
    }

    /// Ask the backend to email a fresh OTP.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn resend_otp(&self, email: &str) -> Result<String, ApiError> {
        self.post_message("/auth/resend_otp", &EmailOnly { email })
            .await
    }

    /// Fetch the currently signed-in user. Requires a stored token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::SessionExpired`] when the token is missing or
    /// rejected.
    pub async fn signed_in_user(&self) -> Result<User, ApiError> {
        self.get_data("/auth/signed_in_user").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Envelope;

    const SIGN_IN_FIXTURE: &str = r#"{
        "success": true,
        "data": {
            "token": { "access_token": "jwt-abc-123" },
            "user": {
                "_id": "66f1a2b3c4d5e6f7a8b9c0d1",
                "first_name": "Amina",
                "last_name": "Yusuf",
                "role": "driver",
                "designation": "Lead Driver",
                "email": "amina@example.com"
            }
        },
        "message": "Signed in"
    }"#;

    #[test]
    fn parse_sign_in_response() {
        let envelope: Envelope<Session> = serde_json::from_str(SIGN_IN_FIXTURE).unwrap();
        let session = envelope.into_data().unwrap();
        assert_eq!(session.token.access_token, "jwt-abc-123");
        assert_eq!(session.user.email, "amina@example.com");
        assert_eq!(session.user.role, fleet_core::enums::Role::Driver);
    }

    #[test]
    fn resend_otp_body_is_email_only() {
        let body = serde_json::to_value(EmailOnly {
            email: "amina@example.com",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "email": "amina@example.com" }));
    }
}
