//! Daily vehicle inspection endpoints.

use fleet_core::entities::{DailyInspection, DailyInspectionDraft};

use crate::{ApiClient, error::ApiError};

impl ApiClient {
    /// Submit a new daily inspection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects the
    /// payload.
    pub async fn create_daily_inspection(
        &self,
        draft: &DailyInspectionDraft,
    ) -> Result<DailyInspection, ApiError> {
        self.post_data("/daily-inspection/create_daily_inspection", draft)
            .await
    }

    /// Fetch a single daily inspection by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or no record matches `id`.
    pub async fn get_daily_inspection(&self, id: &str) -> Result<DailyInspection, ApiError> {
        self.get_data(&format!(
            "/daily-inspection/get_daily_inspection/{}",
            urlencoding::encode(id)
        ))
        .await
    }

    /// Fetch every daily inspection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_daily_inspections(&self) -> Result<Vec<DailyInspection>, ApiError> {
        self.get_data("/daily-inspection/get_daily_inspection")
            .await
    }

    /// Replace the daily inspection at `id` with `draft`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects the
    /// payload.
    pub async fn update_daily_inspection(
        &self,
        id: &str,
        draft: &DailyInspectionDraft,
    ) -> Result<DailyInspection, ApiError> {
        self.put_data(
            &format!(
                "/daily-inspection/update_daily_inspection/{}",
                urlencoding::encode(id)
            ),
            draft,
        )
        .await
    }

    /// Delete the daily inspection at `id`, resolving to the deleted id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn delete_daily_inspection(&self, id: &str) -> Result<String, ApiError> {
        self.delete_record(&format!(
            "/daily-inspection/delete_daily_inspection/{}",
            urlencoding::encode(id)
        ))
        .await?;
        Ok(id.to_string())
    }
}
