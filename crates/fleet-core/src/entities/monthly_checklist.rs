use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Keyed;
use crate::errors::CoreError;
use crate::validate;

/// One row of a monthly checklist. `status` uses the wire codes
/// [`crate::enums::ITEM_OK`] / [`crate::enums::ITEM_NOT_OK`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChecklistItem {
    pub item: String,
    pub status: u8,
    pub remark: String,
}

/// Payload of the monthly vehicle maintenance checklist form.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MonthlyChecklistDraft {
    pub veh_name: String,
    pub date: NaiveDate,
    pub checked_by: String,
    pub current_mileage: u32,
    pub date_of_last_oil_change: NaiveDate,
    pub date_of_last_oil_filter_change: NaiveDate,
    pub date_of_last_air_filter_change: NaiveDate,
    pub date_of_carbin_filter_change: NaiveDate,
    pub date_engine_tune_up: NaiveDate,
    pub mileage_of_last_oil_change: u32,
    pub mileage_of_last_air_filter_change: u32,
    pub mileage_of_last_tire_rotation: u32,
    pub checklist_items: Vec<ChecklistItem>,
    pub performed_by_user: String,
}

impl MonthlyChecklistDraft {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first failing field.
    /// The checklist must contain at least one item and every item status
    /// must be a known wire code.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate::require("veh_name", &self.veh_name)?;
        validate::require("checked_by", &self.checked_by)?;
        validate::require_positive("current_mileage", f64::from(self.current_mileage))?;
        validate::require_items("checklist_items", &self.checklist_items)?;
        for entry in &self.checklist_items {
            validate::require("checklist item name", &entry.item)?;
            validate::require_status_code(&entry.item, entry.status)?;
        }
        Ok(())
    }
}

/// A stored monthly checklist record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MonthlyChecklist {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub draft: MonthlyChecklistDraft,
}

impl Keyed for MonthlyChecklist {
    fn record_id(&self) -> &str {
        &self.id
    }
}
