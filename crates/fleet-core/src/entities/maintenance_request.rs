use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Keyed;
use crate::errors::CoreError;
use crate::validate;

/// Payload of the vehicle maintenance request form.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MaintenanceRequestDraft {
    pub veh_number: String,
    pub filled_by: String,
    pub report_date: NaiveDate,
    pub description_of_problem: String,
    pub mechanic_notes: String,
    pub completed_date: NaiveDate,
    pub mechanic_name: String,
    pub performed_by_user: String,
}

impl MaintenanceRequestDraft {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first failing field.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate::require("veh_number", &self.veh_number)?;
        validate::require("filled_by", &self.filled_by)?;
        validate::require("mechanic_notes", &self.mechanic_notes)?;
        validate::require("description_of_problem", &self.description_of_problem)?;
        validate::require("mechanic_name", &self.mechanic_name)?;
        Ok(())
    }
}

/// A stored vehicle maintenance request record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MaintenanceRequest {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub draft: MaintenanceRequestDraft,
}

impl Keyed for MaintenanceRequest {
    fn record_id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> MaintenanceRequestDraft {
        MaintenanceRequestDraft {
            veh_number: "GT-5512-19".into(),
            filled_by: "A. Owusu".into(),
            report_date: NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
            description_of_problem: "grinding noise when braking".into(),
            mechanic_notes: "front pads worn to backing plate".into(),
            completed_date: NaiveDate::from_ymd_opt(2025, 2, 12).unwrap(),
            mechanic_name: "E. Boateng".into(),
            performed_by_user: "usr_12".into(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn missing_mechanic_name_fails() {
        let mut d = draft();
        d.mechanic_name.clear();
        assert!(d.validate().is_err());
    }

    #[test]
    fn dates_serialize_as_iso_strings() {
        let json = serde_json::to_value(draft()).unwrap();
        assert_eq!(json["report_date"], "2025-02-10");
        assert_eq!(json["completed_date"], "2025-02-12");
    }
}
