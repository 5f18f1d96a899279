use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;
use crate::errors::CoreError;
use crate::validate;

/// A signed-in user as returned by `/auth/signed_in_user`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub designation: String,
    #[serde(default)]
    pub user_img: String,
    pub email: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Sign-in payload.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if either field is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate::require("email", &self.email)?;
        validate::require("password", &self.password)?;
        Ok(())
    }
}

/// Sign-up payload. `user_img` carries an already-uploaded image URL or an
/// empty string.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SignUp {
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub designation: String,
    #[serde(default)]
    pub user_img: String,
    pub email: String,
    pub password: String,
}

impl SignUp {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first failing field.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate::require("first_name", &self.first_name)?;
        validate::require("last_name", &self.last_name)?;
        validate::require("designation", &self.designation)?;
        validate::require("email", &self.email)?;
        if !self.email.contains('@') {
            return Err(CoreError::Validation(
                "email must be a valid address".into(),
            ));
        }
        validate::require("password", &self.password)?;
        Ok(())
    }
}

/// OTP verification payload.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OtpVerification {
    pub email: String,
    pub otp: String,
}

impl OtpVerification {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if either field is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate::require("email", &self.email)?;
        validate::require("otp", &self.otp)?;
        Ok(())
    }
}
