//! Daily site report endpoints.
//!
//! Follows the same route naming convention as the other record families.

use fleet_core::entities::{SiteReport, SiteReportDraft};

use crate::{ApiClient, error::ApiError};

impl ApiClient {
    /// Submit a new daily site report.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects the
    /// payload.
    pub async fn create_site_report(&self, draft: &SiteReportDraft) -> Result<SiteReport, ApiError> {
        self.post_data("/daily-site-report/create_daily_site_report", draft)
            .await
    }

    /// Fetch a single daily site report by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or no record matches `id`.
    pub async fn get_site_report(&self, id: &str) -> Result<SiteReport, ApiError> {
        self.get_data(&format!(
            "/daily-site-report/get_daily_site_report/{}",
            urlencoding::encode(id)
        ))
        .await
    }

    /// Fetch every daily site report.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_site_reports(&self) -> Result<Vec<SiteReport>, ApiError> {
        self.get_data("/daily-site-report/get_daily_site_report")
            .await
    }

    /// Replace the daily site report at `id` with `draft`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects the
    /// payload.
    pub async fn update_site_report(
        &self,
        id: &str,
        draft: &SiteReportDraft,
    ) -> Result<SiteReport, ApiError> {
        self.put_data(
            &format!(
                "/daily-site-report/update_daily_site_report/{}",
                urlencoding::encode(id)
            ),
            draft,
        )
        .await
    }

    /// Delete the daily site report at `id`, resolving to the deleted id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn delete_site_report(&self, id: &str) -> Result<String, ApiError> {
        self.delete_record(&format!(
            "/daily-site-report/delete_daily_site_report/{}",
            urlencoding::encode(id)
        ))
        .await?;
        Ok(id.to_string())
    }
}
