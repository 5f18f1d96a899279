//! Employee weekly activity report endpoints.

use fleet_core::entities::{ActivityReport, ActivityReportDraft};

use crate::{ApiClient, error::ApiError};

impl ApiClient {
    /// Submit a new activity report.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects the
    /// payload.
    pub async fn create_activity_report(
        &self,
        draft: &ActivityReportDraft,
    ) -> Result<ActivityReport, ApiError> {
        self.post_data(
            "/employee-activity-report/create_employee_activity_report",
            draft,
        )
        .await
    }

    /// Fetch a single activity report by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or no record matches `id`.
    pub async fn get_activity_report(&self, id: &str) -> Result<ActivityReport, ApiError> {
        self.get_data(&format!(
            "/employee-activity-report/get_employee_activity_report/{}",
            urlencoding::encode(id)
        ))
        .await
    }

    /// Fetch every activity report.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_activity_reports(&self) -> Result<Vec<ActivityReport>, ApiError> {
        self.get_data("/employee-activity-report/get_employee_activity_report")
            .await
    }

    /// Replace the activity report at `id` with `draft`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects the
    /// payload.
    pub async fn update_activity_report(
        &self,
        id: &str,
        draft: &ActivityReportDraft,
    ) -> Result<ActivityReport, ApiError> {
        self.put_data(
            &format!(
                "/employee-activity-report/update_employee_activity_report/{}",
                urlencoding::encode(id)
            ),
            draft,
        )
        .await
    }

    /// Delete the activity report at `id`, resolving to the deleted id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn delete_activity_report(&self, id: &str) -> Result<String, ApiError> {
        self.delete_record(&format!(
            "/employee-activity-report/delete_employee_activity_report/{}",
            urlencoding::encode(id)
        ))
        .await?;
        Ok(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::Envelope;
    use fleet_core::entities::ActivityReport;
    use fleet_core::enums::TaskStatus;

    const LIST_FIXTURE: &str = r#"{
        "success": true,
        "data": [
            {
                "_id": "66f1445566778899aabbccdd",
                "createdAt": "2025-03-07T16:40:00Z",
                "performed_by_user": "usr_33",
                "employee_name": "S. Adjei",
                "department": "Operations",
                "designation": "Site supervisor",
                "supervisor": "M. Tetteh",
                "date_of_reporting": "2025-03-07",
                "week": "10",
                "task_items": [
                    {
                        "description": "perimeter fencing, phase 2",
                        "responsibility_delegate": "crew B",
                        "status": "ongoing",
                        "challenges": "late gravel delivery",
                        "recovery_plan": "weekend shift",
                        "comment_remark": "",
                        "approved_by": [
                            { "approval_name": "M. Tetteh", "designation": "Project manager" }
                        ]
                    }
                ]
            }
        ],
        "message": "Reports fetched"
    }"#;

    #[test]
    fn parse_list_response_with_nested_tasks() {
        let envelope: Envelope<Vec<ActivityReport>> = serde_json::from_str(LIST_FIXTURE).unwrap();
        let reports = envelope.into_data().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].draft.task_items[0].status, TaskStatus::Ongoing);
        assert_eq!(
            reports[0].draft.task_items[0].approved_by[0].approval_name,
            "M. Tetteh"
        );
    }
}
