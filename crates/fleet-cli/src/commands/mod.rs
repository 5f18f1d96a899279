pub mod dispatch;
pub mod shared;

pub mod auth;
pub mod forms;
pub mod schema;
pub mod template;

pub mod activity_report;
pub mod daily_inspection;
pub mod maintenance_log;
pub mod maintenance_request;
pub mod monthly_checklist;
pub mod movement_register;
pub mod site_report;
