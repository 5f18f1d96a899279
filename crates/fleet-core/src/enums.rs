//! Status enums, roles, and form identifiers for FleetOps.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! [`Role::forms`] encodes the role-to-form navigation mapping: entity
//! commands check it before any network call.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// OpStatus
// ---------------------------------------------------------------------------

/// Status of one async CRUD operation inside a state container.
///
/// ```text
/// idle → is_loading → succeeded
///                   → failed
/// ```
///
/// There is no transition logic beyond this: a new dispatch of the same
/// operation moves `failed`/`succeeded` back to `is_loading`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OpStatus {
    #[default]
    Idle,
    IsLoading,
    Succeeded,
    Failed,
}

impl OpStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::IsLoading => "is_loading",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }

    /// Whether a request for this operation is currently in flight.
    #[must_use]
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::IsLoading)
    }
}

impl fmt::Display for OpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CrudOp
// ---------------------------------------------------------------------------

/// The five CRUD operations every entity supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CrudOp {
    Create,
    Get,
    List,
    Update,
    Delete,
}

impl CrudOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Get => "get",
            Self::List => "list",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for CrudOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Role of a signed-in user. Gates which forms are reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Driver,
    Employee,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Driver => "driver",
            Self::Employee => "employee",
        }
    }

    /// Forms visible to this role, in navigation order.
    #[must_use]
    pub const fn forms(self) -> &'static [FormKind] {
        match self {
            Self::Admin => &[
                FormKind::MaintenanceLog,
                FormKind::MonthlyChecklist,
                FormKind::MovementRegister,
                FormKind::DailyInspection,
                FormKind::ActivityReport,
                FormKind::SiteReport,
                FormKind::MaintenanceRequest,
            ],
            Self::Driver => &[
                FormKind::MaintenanceLog,
                FormKind::MaintenanceRequest,
                FormKind::DailyInspection,
                FormKind::MovementRegister,
                FormKind::MonthlyChecklist,
            ],
            Self::Employee => &[FormKind::SiteReport, FormKind::ActivityReport],
        }
    }

    /// Check whether this role may open the given form.
    #[must_use]
    pub fn can_access(self, form: FormKind) -> bool {
        self.forms().contains(&form)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FormKind
// ---------------------------------------------------------------------------

/// One of the seven record families managed by parallel CRUD endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    MaintenanceLog,
    MaintenanceRequest,
    MovementRegister,
    MonthlyChecklist,
    DailyInspection,
    ActivityReport,
    SiteReport,
}

impl FormKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MaintenanceLog => "maintenance_log",
            Self::MaintenanceRequest => "maintenance_request",
            Self::MovementRegister => "movement_register",
            Self::MonthlyChecklist => "monthly_checklist",
            Self::DailyInspection => "daily_inspection",
            Self::ActivityReport => "activity_report",
            Self::SiteReport => "site_report",
        }
    }

    /// Human-readable form title, as shown on the navigation cards.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::MaintenanceLog => "vehicle maintenance log",
            Self::MaintenanceRequest => "vehicle maintenance request form",
            Self::MovementRegister => "vehicle movement register",
            Self::MonthlyChecklist => "monthly vehicle maintenance checklist",
            Self::DailyInspection => "daily inspection",
            Self::ActivityReport => "employee weekly activity report",
            Self::SiteReport => "daily site report",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Status of a task row in an employee weekly activity report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Ongoing,
    Suspended,
    Completed,
}

impl TaskStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ongoing => "ongoing",
            Self::Suspended => "suspended",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Item status codes
// ---------------------------------------------------------------------------

/// Wire value for a checklist/inspection item that passed.
pub const ITEM_OK: u8 = 1;
/// Wire value for a checklist/inspection item flagged defective.
pub const ITEM_NOT_OK: u8 = 0;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(op_status_idle, OpStatus, OpStatus::Idle, "idle");
    test_serde_roundtrip!(
        op_status_loading,
        OpStatus,
        OpStatus::IsLoading,
        "is_loading"
    );
    test_serde_roundtrip!(crud_op_delete, CrudOp, CrudOp::Delete, "delete");
    test_serde_roundtrip!(role_driver, Role, Role::Driver, "driver");
    test_serde_roundtrip!(
        form_site_report,
        FormKind,
        FormKind::SiteReport,
        "site_report"
    );
    test_serde_roundtrip!(task_suspended, TaskStatus, TaskStatus::Suspended, "suspended");

    #[test]
    fn op_status_defaults_to_idle() {
        assert_eq!(OpStatus::default(), OpStatus::Idle);
        assert!(!OpStatus::default().is_loading());
        assert!(OpStatus::IsLoading.is_loading());
    }

    #[test]
    fn admin_sees_every_form() {
        let forms = Role::Admin.forms();
        assert_eq!(forms.len(), 7);
        assert!(Role::Admin.can_access(FormKind::SiteReport));
        assert!(Role::Admin.can_access(FormKind::MaintenanceRequest));
    }

    #[test]
    fn driver_form_access() {
        let forms = Role::Driver.forms();
        assert_eq!(forms.len(), 5);
        assert!(Role::Driver.can_access(FormKind::MaintenanceLog));
        assert!(Role::Driver.can_access(FormKind::MonthlyChecklist));
        assert!(!Role::Driver.can_access(FormKind::SiteReport));
        assert!(!Role::Driver.can_access(FormKind::ActivityReport));
    }

    #[test]
    fn employee_form_access() {
        let forms = Role::Employee.forms();
        assert_eq!(forms, &[FormKind::SiteReport, FormKind::ActivityReport]);
        assert!(!Role::Employee.can_access(FormKind::MovementRegister));
    }

    #[test]
    fn form_titles_match_navigation_cards() {
        assert_eq!(FormKind::MaintenanceLog.title(), "vehicle maintenance log");
        assert_eq!(
            FormKind::MonthlyChecklist.title(),
            "monthly vehicle maintenance checklist"
        );
        assert_eq!(FormKind::SiteReport.title(), "daily site report");
    }
}
