//! Vehicle maintenance request endpoints.
//!
//! Unlike most record families, the list endpoint here uses the backend's
//! `get_all_` prefix rather than the bare `get_` path.

use fleet_core::entities::{MaintenanceRequest, MaintenanceRequestDraft};

use crate::{ApiClient, error::ApiError};

impl ApiClient {
    /// Submit a new maintenance request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects the
    /// payload.
    pub async fn create_maintenance_request(
        &self,
        draft: &MaintenanceRequestDraft,
    ) -> Result<MaintenanceRequest, ApiError> {
        self.post_data(
            "/vehicle-maintenance-req-form/create_vehicle_maintenance_req_form",
            draft,
        )
        .await
    }

    /// Fetch a single maintenance request by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or no record matches `id`.
    pub async fn get_maintenance_request(&self, id: &str) -> Result<MaintenanceRequest, ApiError> {
        self.get_data(&format!(
            "/vehicle-maintenance-req-form/get_vehicle_maintenance_req_form/{}",
            urlencoding::encode(id)
        ))
        .await
    }

    /// Fetch every maintenance request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_maintenance_requests(&self) -> Result<Vec<MaintenanceRequest>, ApiError> {
        self.get_data("/vehicle-maintenance-req-form/get_all_vehicle_maintenance_req_form")
            .await
    }

    /// Replace the maintenance request at `id` with `draft`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects the
    /// payload.
    pub async fn update_maintenance_request(
        &self,
        id: &str,
        draft: &MaintenanceRequestDraft,
    ) -> Result<MaintenanceRequest, ApiError> {
        self.put_data(
            &format!(
                "/vehicle-maintenance-req-form/update_vehicle_maintenance_req_form/{}",
                urlencoding::encode(id)
            ),
            draft,
        )
        .await
    }

    /// Delete the maintenance request at `id`, resolving to the deleted id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn delete_maintenance_request(&self, id: &str) -> Result<String, ApiError> {
        self.delete_record(&format!(
            "/vehicle-maintenance-req-form/delete_vehicle_maintenance_req_form/{}",
            urlencoding::encode(id)
        ))
        .await?;
        Ok(id.to_string())
    }
}
