//! Monthly vehicle maintenance checklist endpoints.

use fleet_core::entities::{MonthlyChecklist, MonthlyChecklistDraft};

use crate::{ApiClient, error::ApiError};

impl ApiClient {
    /// Submit a new monthly checklist.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects the
    /// payload.
    pub async fn create_monthly_checklist(
        &self,
        draft: &MonthlyChecklistDraft,
    ) -> Result<MonthlyChecklist, ApiError> {
        self.post_data("/monthly-checklist/create_monthly_checklist", draft)
            .await
    }

    /// Fetch a single monthly checklist by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or no record matches `id`.
    pub async fn get_monthly_checklist(&self, id: &str) -> Result<MonthlyChecklist, ApiError> {
        self.get_data(&format!(
            "/monthly-checklist/get_monthly_checklist/{}",
            urlencoding::encode(id)
        ))
        .await
    }

    /// Fetch every monthly checklist.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_monthly_checklists(&self) -> Result<Vec<MonthlyChecklist>, ApiError> {
        self.get_data("/monthly-checklist/get_monthly_checklist")
            .await
    }

    /// Replace the monthly checklist at `id` with `draft`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects the
    /// payload.
    pub async fn update_monthly_checklist(
        &self,
        id: &str,
        draft: &MonthlyChecklistDraft,
    ) -> Result<MonthlyChecklist, ApiError> {
        self.put_data(
            &format!(
                "/monthly-checklist/update_monthly_checklist/{}",
                urlencoding::encode(id)
            ),
            draft,
        )
        .await
    }

    /// Delete the monthly checklist at `id`, resolving to the deleted id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn delete_monthly_checklist(&self, id: &str) -> Result<String, ApiError> {
        self.delete_record(&format!(
            "/monthly-checklist/delete_monthly_checklist/{}",
            urlencoding::encode(id)
        ))
        .await?;
        Ok(id.to_string())
    }
}
