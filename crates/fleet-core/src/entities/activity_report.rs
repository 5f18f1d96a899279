use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Keyed;
use crate::enums::TaskStatus;
use crate::errors::CoreError;
use crate::validate;

/// Sign-off on a task row.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ApprovedBy {
    pub approval_name: String,
    pub designation: String,
}

/// One task row of a weekly activity report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskItem {
    pub description: String,
    pub responsibility_delegate: String,
    pub status: TaskStatus,
    pub challenges: String,
    pub recovery_plan: String,
    pub comment_remark: String,
    pub approved_by: Vec<ApprovedBy>,
}

/// Payload of the employee weekly activity report form. `week` carries the
/// ISO week number as a string, the way the form submitted it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActivityReportDraft {
    pub performed_by_user: String,
    pub employee_name: String,
    pub department: String,
    pub designation: String,
    pub supervisor: String,
    pub date_of_reporting: NaiveDate,
    pub week: String,
    pub task_items: Vec<TaskItem>,
}

impl ActivityReportDraft {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first failing field. The
    /// report must contain at least one task row.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate::require("employee_name", &self.employee_name)?;
        validate::require("department", &self.department)?;
        validate::require("designation", &self.designation)?;
        validate::require("supervisor", &self.supervisor)?;
        validate::require("week", &self.week)?;
        validate::require_items("task_items", &self.task_items)?;
        for task in &self.task_items {
            validate::require("task description", &task.description)?;
        }
        Ok(())
    }
}

/// A stored weekly activity report record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActivityReport {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub draft: ActivityReportDraft,
}

impl Keyed for ActivityReport {
    fn record_id(&self) -> &str {
        &self.id
    }
}
