use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Keyed;
use crate::errors::CoreError;
use crate::validate;

/// One inspected item. `status` is 1 for passed, 0 for defective.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InspectionItem {
    pub item: String,
    pub status: u8,
}

/// Payload of the daily inspection form. Items are grouped by vehicle area
/// exactly as the paper form lays them out.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DailyInspectionDraft {
    pub date: NaiveDate,
    pub driver_name: String,
    pub total_mileage: u32,
    pub general_items: Vec<InspectionItem>,
    pub driver_area_items: Vec<InspectionItem>,
    pub front_rare_items: Vec<InspectionItem>,
    pub performed_by_user: String,
}

impl DailyInspectionDraft {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first failing field. At
    /// least one item group must be filled in.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate::require("driver_name", &self.driver_name)?;
        validate::require_positive("total_mileage", f64::from(self.total_mileage))?;
        if self.general_items.is_empty()
            && self.driver_area_items.is_empty()
            && self.front_rare_items.is_empty()
        {
            return Err(CoreError::Validation(
                "at least one inspection item is required".into(),
            ));
        }
        for entry in self
            .general_items
            .iter()
            .chain(&self.driver_area_items)
            .chain(&self.front_rare_items)
        {
            validate::require("inspection item name", &entry.item)?;
            validate::require_status_code(&entry.item, entry.status)?;
        }
        Ok(())
    }
}

/// A stored daily inspection record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DailyInspection {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub draft: DailyInspectionDraft,
}

impl Keyed for DailyInspection {
    fn record_id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use crate::enums::{ITEM_NOT_OK, ITEM_OK};

    use super::*;

    fn draft() -> DailyInspectionDraft {
        DailyInspectionDraft {
            date: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            driver_name: "A. Owusu".into(),
            total_mileage: 45_790,
            general_items: vec![InspectionItem {
                item: "horn".into(),
                status: ITEM_OK,
            }],
            driver_area_items: vec![InspectionItem {
                item: "seat belt".into(),
                status: ITEM_NOT_OK,
            }],
            front_rare_items: vec![],
            performed_by_user: "usr_12".into(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn all_groups_empty_fails() {
        let mut d = draft();
        d.general_items.clear();
        d.driver_area_items.clear();
        let err = d.validate().unwrap_err();
        assert!(err.to_string().contains("at least one inspection item"));
    }

    #[test]
    fn item_groups_keep_wire_names() {
        let json = serde_json::to_value(draft()).unwrap();
        assert!(json.get("general_items").is_some());
        assert!(json.get("driver_area_items").is_some());
        assert!(json.get("front_rare_items").is_some());
    }
}
