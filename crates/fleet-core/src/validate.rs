//! Client-side validation helpers.
//!
//! Every draft payload is validated before it is handed to the API client;
//! a failing payload never reaches the network layer. Checks mirror the
//! per-field presence rules of the original forms.

use crate::errors::CoreError;

/// Require a non-empty string field.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] naming the field when empty.
pub fn require(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Require a strictly positive numeric field.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] when the value is zero or negative.
pub fn require_positive(field: &str, value: f64) -> Result<(), CoreError> {
    if value <= 0.0 {
        return Err(CoreError::Validation(format!(
            "{field} must be a positive number"
        )));
    }
    Ok(())
}

/// Require a non-empty embedded list.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] when the list has no rows.
pub fn require_items<T>(field: &str, items: &[T]) -> Result<(), CoreError> {
    if items.is_empty() {
        return Err(CoreError::Validation(format!(
            "{field} must contain at least one item"
        )));
    }
    Ok(())
}

/// Require an item status code to be one of the known wire values (0 or 1).
///
/// # Errors
///
/// Returns [`CoreError::Validation`] for any other code.
pub fn require_status_code(field: &str, status: u8) -> Result<(), CoreError> {
    if status > 1 {
        return Err(CoreError::Validation(format!(
            "{field} status must be 0 (not ok) or 1 (ok), got {status}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_blank() {
        assert!(require("make", "").is_err());
        assert!(require("make", "   ").is_err());
        assert!(require("make", "Toyota").is_ok());
    }

    #[test]
    fn require_positive_rejects_zero_and_negative() {
        assert!(require_positive("cost", 0.0).is_err());
        assert!(require_positive("cost", -3.5).is_err());
        assert!(require_positive("cost", 120.0).is_ok());
    }

    #[test]
    fn require_items_rejects_empty_list() {
        let empty: [u8; 0] = [];
        assert!(require_items("checklist_items", &empty).is_err());
        assert!(require_items("checklist_items", &[1u8]).is_ok());
    }

    #[test]
    fn status_code_bounds() {
        assert!(require_status_code("item", 0).is_ok());
        assert!(require_status_code("item", 1).is_ok());
        assert!(require_status_code("item", 2).is_err());
    }

    #[test]
    fn validation_error_names_the_field() {
        let err = require("veh_number", "").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: veh_number is required");
    }
}
