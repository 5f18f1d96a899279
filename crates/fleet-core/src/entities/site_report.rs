use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Keyed;
use crate::errors::CoreError;
use crate::validate;

/// The fixed inspection catalog printed on the daily site report form.
pub const SITE_INSPECTION_CATALOG: [&str; 27] = [
    "CHECK BELT FOR SIGNS OF FRAY OR CRACKS",
    "CHECK HOSES FOR LEAKS OR BULGES",
    "CHECK ENGINE AND GROUND FOR SIGNS OF LEAKS",
    "MAKE CERTAIN HEATER AND AIR CONDITIONING WORK",
    "CHECK WIPERS",
    "HEADLIGHTS; HIGH BEAM",
    "HEADLIGHTS; LOW BEAM",
    "FOG OR DRIVING LIGHTS",
    "TURN SIGNAL",
    "BRAKE LIGHT / TAIL LIGHT",
    "HAZARD LIGHTS",
    "DOOR LOCKS",
    "WINDOWS / WINDSHIELD FUNCTION OR CRACKS",
    "RADIO",
    "HORN",
    "TIRES – TREAD/CONDITION",
    "TIRES – PROPER INFLATION",
    "Fire Extinguisher",
    "FIRST AID KIT",
    "ACCIDENT INFORMATION PACKET IN GLOVE BOX",
    "LIQUID LEVEL CHECK",
    "COOLANT",
    "OIL",
    "AUTO TRANSMISSION",
    "POWER STEERING",
    "BRAKES",
    "WINDOW WASHER",
];

/// One row of a site report inspection. `status` is 1 for ok, 0 for not ok.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SiteInspectionItem {
    pub item: String,
    pub status: u8,
    pub remark: String,
}

/// Payload of the daily site report form.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SiteReportDraft {
    pub veh_number: String,
    pub date: NaiveDate,
    pub current_mileage: u32,
    pub checked_by: String,
    pub date_of_last_oil_change: NaiveDate,
    pub date_of_last_air_filter_change: NaiveDate,
    pub date_of_last_cabin_filter_change: NaiveDate,
    pub date_of_last_oil_filter_change: NaiveDate,
    pub date_of_last_engine_tune_up: NaiveDate,
    pub mileage_of_last_oil_change: u32,
    pub mileage_of_last_air_filter_change: u32,
    pub mileage_of_last_tire_rotation: u32,
    pub inspection_items: Vec<SiteInspectionItem>,
    pub performed_by_user: String,
}

impl SiteReportDraft {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first failing field.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate::require("veh_number", &self.veh_number)?;
        validate::require("checked_by", &self.checked_by)?;
        validate::require_positive("current_mileage", f64::from(self.current_mileage))?;
        validate::require_items("inspection_items", &self.inspection_items)?;
        for entry in &self.inspection_items {
            validate::require("inspection item name", &entry.item)?;
            validate::require_status_code(&entry.item, entry.status)?;
        }
        Ok(())
    }
}

/// A stored daily site report record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SiteReport {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub draft: SiteReportDraft,
}

impl Keyed for SiteReport {
    fn record_id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use crate::enums::ITEM_OK;

    use super::*;

    fn draft() -> SiteReportDraft {
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        SiteReportDraft {
            veh_number: "GR-2144-21".into(),
            date,
            current_mileage: 84_900,
            checked_by: "S. Adjei".into(),
            date_of_last_oil_change: date,
            date_of_last_air_filter_change: date,
            date_of_last_cabin_filter_change: date,
            date_of_last_oil_filter_change: date,
            date_of_last_engine_tune_up: date,
            mileage_of_last_oil_change: 80_000,
            mileage_of_last_air_filter_change: 82_000,
            mileage_of_last_tire_rotation: 83_000,
            inspection_items: vec![SiteInspectionItem {
                item: SITE_INSPECTION_CATALOG[0].into(),
                status: ITEM_OK,
                remark: String::new(),
            }],
            performed_by_user: "usr_33".into(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn catalog_has_27_items() {
        assert_eq!(SITE_INSPECTION_CATALOG.len(), 27);
    }

    #[test]
    fn empty_inspection_fails() {
        let mut d = draft();
        d.inspection_items.clear();
        assert!(d.validate().is_err());
    }
}
