//! Shared HTTP response helpers for backend endpoints.
//!
//! Centralizes status-code checks (401 session expiry with credential
//! clearing, 403 permission denial, 5xx server failures) so individual
//! endpoint modules stay focused on request construction and response
//! mapping.

use serde_json::Value;

use crate::envelope::Envelope;
use crate::error::ApiError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **401 Unauthorized** → clears stored credentials (best effort) and
///   returns [`ApiError::SessionExpired`] so the caller can prompt for a
///   fresh sign-in.
/// - **403 Forbidden** → [`ApiError::Forbidden`].
/// - **5xx** → [`ApiError::Server`] without leaking the response body.
/// - **Other non-success status** → [`ApiError::Api`] with the envelope
///   message when the body parses as one, the raw body otherwise.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();

    if status == reqwest::StatusCode::UNAUTHORIZED {
        if let Err(error) = fleet_auth::token_store::delete() {
            tracing::warn!(%error, "failed to clear stored credentials after 401");
        }
        return Err(ApiError::SessionExpired);
    }

    if status == reqwest::StatusCode::FORBIDDEN {
        return Err(ApiError::Forbidden);
    }

    if status.is_server_error() {
        return Err(ApiError::Server {
            status: status.as_u16(),
        });
    }

    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Api {
            status: status.as_u16(),
            message: envelope_message(body),
        });
    }

    Ok(resp)
}

/// Pull the `message` out of an error envelope, falling back to the raw body.
fn envelope_message(body: String) -> String {
    serde_json::from_str::<Envelope<Value>>(&body)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn unauthorized_becomes_session_expired() {
        let resp = mock_response(401, "");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, ApiError::SessionExpired));
    }

    #[tokio::test]
    async fn forbidden_maps_to_permission_error() {
        let resp = mock_response(403, "");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, ApiError::Forbidden));
    }

    #[tokio::test]
    async fn server_errors_hide_the_body() {
        let resp = mock_response(503, "<html>gateway timeout</html>");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, ApiError::Server { status: 503 }));
    }

    #[tokio::test]
    async fn client_error_uses_envelope_message() {
        let resp = mock_response(404, r#"{"success": false, "message": "Form not found"}"#);
        let err = check_response(resp).await.unwrap_err();
        assert!(
            matches!(err, ApiError::Api { status: 404, ref message } if message == "Form not found")
        );
    }

    #[tokio::test]
    async fn client_error_falls_back_to_raw_body() {
        let resp = mock_response(400, "bad request");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 400, ref message } if message == "bad request"));
    }

    #[tokio::test]
    async fn success_passes_through() {
        let resp = mock_response(200, r#"{"success": true, "data": []}"#);
        assert!(check_response(resp).await.is_ok());
    }
}
