use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Keyed;
use crate::errors::CoreError;
use crate::validate;

/// Payload of the vehicle maintenance log form.
///
/// `mileage_of_service` keeps the backend's `milage_of_service` spelling on
/// the wire.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MaintenanceLogDraft {
    pub make: String,
    pub model: String,
    pub year: u32,
    pub veh_id_number: String,
    pub engine: String,
    pub date_of_service: NaiveDate,
    #[serde(rename = "milage_of_service")]
    pub mileage_of_service: u32,
    pub performed_by_name: String,
    pub work_performed_by_service_schedule: String,
    pub cost: f64,
    pub invoice: String,
    pub notes: String,
}

impl MaintenanceLogDraft {
    /// Presence checks mirroring the form: every field is required, numeric
    /// fields must be positive.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first failing field.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate::require("make", &self.make)?;
        validate::require("model", &self.model)?;
        validate::require_positive("year", f64::from(self.year))?;
        validate::require("veh_id_number", &self.veh_id_number)?;
        validate::require("engine", &self.engine)?;
        validate::require_positive("milage_of_service", f64::from(self.mileage_of_service))?;
        validate::require("performed_by_name", &self.performed_by_name)?;
        validate::require(
            "work_performed_by_service_schedule",
            &self.work_performed_by_service_schedule,
        )?;
        validate::require_positive("cost", self.cost)?;
        validate::require("invoice", &self.invoice)?;
        validate::require("notes", &self.notes)?;
        Ok(())
    }
}

/// A stored vehicle maintenance log record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MaintenanceLog {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub draft: MaintenanceLogDraft,
}

impl Keyed for MaintenanceLog {
    fn record_id(&self) -> &str {
        &self.id
    }
}
