//! Vehicle maintenance log endpoints.

use fleet_core::entities::{MaintenanceLog, MaintenanceLogDraft};

use crate::{ApiClient, error::ApiError};

impl ApiClient {
    /// Submit a new maintenance log entry.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects the
    /// payload.
    pub async fn create_maintenance_log(
        &self,
        draft: &MaintenanceLogDraft,
    ) -> Result<MaintenanceLog, ApiError> {
        self.post_data(
            "/vehicle-maintenance-log/create_vehicle_maintenance_log_form",
            draft,
        )
        .await
    }

    /// Fetch a single maintenance log entry by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or no record matches `id`.
    pub async fn get_maintenance_log(&self, id: &str) -> Result<MaintenanceLog, ApiError> {
        self.get_data(&format!(
            "/vehicle-maintenance-log/get_vehicle_maintenance_log_form/{}",
            urlencoding::encode(id)
        ))
        .await
    }

    /// Fetch every maintenance log entry.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_maintenance_logs(&self) -> Result<Vec<MaintenanceLog>, ApiError> {
        self.get_data("/vehicle-maintenance-log/get_vehicle_maintenance_log_form")
            .await
    }

    /// Replace the maintenance log entry at `id` with `draft`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects the
    /// payload.
    pub async fn update_maintenance_log(
        &self,
        id: &str,
        draft: &MaintenanceLogDraft,
    ) -> Result<MaintenanceLog, ApiError> {
        self.put_data(
            &format!(
                "/vehicle-maintenance-log/update_vehicle_maintenance_log_form/{}",
                urlencoding::encode(id)
            ),
            draft,
        )
        .await
    }

    /// Delete the maintenance log entry at `id`. Resolves to the deleted id
    /// so state containers can drop the matching record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn delete_maintenance_log(&self, id: &str) -> Result<String, ApiError> {
        self.delete_record(&format!(
            "/vehicle-maintenance-log/delete_vehicle_maintenance_log_form/{}",
            urlencoding::encode(id)
        ))
        .await?;
        Ok(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Envelope;
    use fleet_core::Keyed;

    const LIST_FIXTURE: &str = r#"{
        "success": true,
        "data": [
            {
                "_id": "66f1a2b3c4d5e6f7a8b9c0d1",
                "createdAt": "2025-03-04T21:15:00Z",
                "make": "Toyota",
                "model": "Hilux",
                "year": 2021,
                "veh_id_number": "GX-4521",
                "engine": "2.8L diesel",
                "date_of_service": "2025-03-01",
                "milage_of_service": 84250,
                "performed_by_name": "Kwame Mensah",
                "work_performed_by_service_schedule": "Oil and filter change",
                "cost": 350.5,
                "invoice": "INV-0042",
                "notes": "Next service at 90,000 km"
            }
        ],
        "message": "Forms fetched"
    }"#;

    #[test]
    fn parse_list_response() {
        let envelope: Envelope<Vec<MaintenanceLog>> =
            serde_json::from_str(LIST_FIXTURE).unwrap();
        let logs = envelope.into_data().unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].record_id(), "66f1a2b3c4d5e6f7a8b9c0d1");
        assert_eq!(logs[0].draft.veh_id_number, "GX-4521");
        assert_eq!(logs[0].draft.mileage_of_service, 84_250);
    }
}
