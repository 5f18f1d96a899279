pub mod activity_report;
pub mod auth;
pub mod daily_inspection;
pub mod maintenance_log;
pub mod maintenance_request;
pub mod monthly_checklist;
pub mod movement_register;
pub mod site_report;

pub use activity_report::ActivityReportCommands;
pub use auth::AuthCommands;
pub use daily_inspection::DailyInspectionCommands;
pub use maintenance_log::MaintenanceLogCommands;
pub use maintenance_request::MaintenanceRequestCommands;
pub use monthly_checklist::MonthlyChecklistCommands;
pub use movement_register::MovementRegisterCommands;
pub use site_report::SiteReportCommands;
