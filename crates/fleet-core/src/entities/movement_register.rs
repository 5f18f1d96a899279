use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Keyed;
use crate::errors::CoreError;
use crate::validate;

/// Payload of the vehicle movement register form.
///
/// `km` is derived from the meter readings; [`MovementRegisterDraft::new`]
/// computes it so callers cannot submit an inconsistent distance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MovementRegisterDraft {
    pub veh_number: String,
    pub month: String,
    pub week: String,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub meter_start: u32,
    pub meter_end: u32,
    pub km: u32,
    pub security_name: String,
}

impl MovementRegisterDraft {
    /// Build a draft, deriving `km` from the meter readings.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        veh_number: String,
        month: String,
        week: String,
        date_from: NaiveDate,
        date_to: NaiveDate,
        meter_start: u32,
        meter_end: u32,
        security_name: String,
    ) -> Self {
        Self {
            veh_number,
            month,
            week,
            date_from,
            date_to,
            meter_start,
            meter_end,
            km: meter_end.saturating_sub(meter_start),
            security_name,
        }
    }

    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first failing field.
    /// Meter readings must be positive and strictly increasing.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate::require("veh_number", &self.veh_number)?;
        validate::require("month", &self.month)?;
        validate::require("week", &self.week)?;
        validate::require_positive("meter_start", f64::from(self.meter_start))?;
        if self.meter_end <= self.meter_start {
            return Err(CoreError::Validation(
                "meter_end must be greater than meter_start".into(),
            ));
        }
        validate::require("security_name", &self.security_name)?;
        Ok(())
    }
}

/// A stored vehicle movement register record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MovementRegister {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub draft: MovementRegisterDraft,
}

impl Keyed for MovementRegister {
    fn record_id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn draft() -> MovementRegisterDraft {
        MovementRegisterDraft::new(
            "GW-881-22".into(),
            "March".into(),
            "Week 2".into(),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            45_200,
            45_790,
            "J. Ankrah".into(),
        )
    }

    #[test]
    fn km_is_derived_from_meters() {
        assert_eq!(draft().km, 590);
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn meter_end_must_exceed_meter_start() {
        let mut d = draft();
        d.meter_end = d.meter_start;
        let err = d.validate().unwrap_err();
        assert!(err.to_string().contains("meter_end"));
    }

    #[test]
    fn zero_meter_start_fails() {
        let mut d = draft();
        d.meter_start = 0;
        assert!(d.validate().is_err());
    }
}
