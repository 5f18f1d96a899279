//! Entity structs for the seven record families.
//!
//! Each family has a draft struct (the payload the form submits) and a record
//! struct (the draft plus the server-assigned `_id` and `createdAt`). Records
//! implement [`Keyed`] so state containers can merge server responses by
//! identifier equality.

pub mod activity_report;
pub mod daily_inspection;
pub mod maintenance_log;
pub mod maintenance_request;
pub mod monthly_checklist;
pub mod movement_register;
pub mod site_report;
pub mod user;

pub use activity_report::{ActivityReport, ActivityReportDraft, ApprovedBy, TaskItem};
pub use daily_inspection::{DailyInspection, DailyInspectionDraft, InspectionItem};
pub use maintenance_log::{MaintenanceLog, MaintenanceLogDraft};
pub use maintenance_request::{MaintenanceRequest, MaintenanceRequestDraft};
pub use monthly_checklist::{ChecklistItem, MonthlyChecklist, MonthlyChecklistDraft};
pub use movement_register::{MovementRegister, MovementRegisterDraft};
pub use site_report::{SITE_INSPECTION_CATALOG, SiteInspectionItem, SiteReport, SiteReportDraft};
pub use user::{Credentials, OtpVerification, SignUp, User};

/// A record addressable by its server-assigned identifier.
pub trait Keyed {
    fn record_id(&self) -> &str;
}
