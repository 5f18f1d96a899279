//! # fleet-api
//!
//! Typed HTTP client for the FleetOps records backend.
//!
//! Wraps `reqwest` with bearer-token injection (from `fleet-auth`), the
//! `{ success, data, message }` response envelope, and one module of typed
//! endpoints per record family:
//! - vehicle maintenance log
//! - vehicle maintenance request
//! - vehicle movement register
//! - monthly vehicle maintenance checklist
//! - daily vehicle inspection
//! - employee activity report
//! - daily site report

pub mod activity_report;
pub mod auth;
pub mod daily_inspection;
pub mod maintenance_log;
pub mod maintenance_request;
pub mod monthly_checklist;
pub mod movement_register;
pub mod site_report;

mod envelope;
mod error;
mod http;

pub use envelope::Envelope;
pub use error::ApiError;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::http::check_response;

/// HTTP client for the records backend.
///
/// One instance is shared across all endpoint modules; the bearer token is
/// resolved per request so a fresh sign-in takes effect without rebuilding
/// the client.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    /// Create a client for the backend at `base_url`.
    ///
    /// Trailing slashes on `base_url` are trimmed so endpoint paths can be
    /// concatenated directly.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        Self {
            http: reqwest::Client::builder()
                .user_agent("fleetops/0.1")
                .default_headers(headers)
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .expect("reqwest client should build"),
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match fleet_auth::resolve_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// GET `path` and unwrap the envelope's `data`.
    pub(crate) async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.authorized(self.http.get(self.url(path))).send().await?;
        let resp = check_response(resp).await?;
        let envelope: Envelope<T> = resp.json().await?;
        envelope.into_data()
    }

    /// POST `body` to `path` and unwrap the envelope's `data`.
    pub(crate) async fn post_data<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let resp = self
            .authorized(self.http.post(self.url(path)).json(body))
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let envelope: Envelope<T> = resp.json().await?;
        envelope.into_data()
    }

    /// POST `body` to `path` and unwrap the envelope's `message`.
    pub(crate) async fn post_message<B>(&self, path: &str, body: &B) -> Result<String, ApiError>
    where
        B: Serialize + Sync,
    {
        let resp = self
            .authorized(self.http.post(self.url(path)).json(body))
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let envelope: Envelope<serde_json::Value> = resp.json().await?;
        envelope.into_message()
    }

    /// PUT `body` to `path` and unwrap the envelope's `data`.
    pub(crate) async fn put_data<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let resp = self
            .authorized(self.http.put(self.url(path)).json(body))
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let envelope: Envelope<T> = resp.json().await?;
        envelope.into_data()
    }

    /// DELETE `path`, succeeding when the envelope reports success.
    pub(crate) async fn delete_record(&self, path: &str) -> Result<(), ApiError> {
        let resp = self
            .authorized(self.http.delete(self.url(path)))
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let envelope: Envelope<serde_json::Value> = resp.json().await?;
        envelope.into_message().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("https://api.example.com/", 10);
        assert_eq!(
            client.url("/auth/sign_in"),
            "https://api.example.com/auth/sign_in"
        );
    }

    #[test]
    fn paths_concatenate_without_double_slash() {
        let client = ApiClient::new("https://api.example.com", 10);
        assert_eq!(
            client.url("/vehicle-maintenance-log/get_vehicle_maintenance_log_form"),
            "https://api.example.com/vehicle-maintenance-log/get_vehicle_maintenance_log_form"
        );
    }
}
