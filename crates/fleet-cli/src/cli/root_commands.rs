use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    ActivityReportCommands, AuthCommands, DailyInspectionCommands, MaintenanceLogCommands,
    MaintenanceRequestCommands, MonthlyChecklistCommands, MovementRegisterCommands,
    SiteReportCommands,
};

/// All top-level commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in, register, verify OTP, manage the session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// List the forms available to the signed-in user's role.
    Forms,
    /// Vehicle maintenance log records.
    MaintenanceLog {
        #[command(subcommand)]
        action: MaintenanceLogCommands,
    },
    /// Vehicle maintenance request records.
    MaintenanceRequest {
        #[command(subcommand)]
        action: MaintenanceRequestCommands,
    },
    /// Vehicle movement register records.
    MovementRegister {
        #[command(subcommand)]
        action: MovementRegisterCommands,
    },
    /// Monthly vehicle maintenance checklist records.
    MonthlyChecklist {
        #[command(subcommand)]
        action: MonthlyChecklistCommands,
    },
    /// Daily vehicle inspection records.
    DailyInspection {
        #[command(subcommand)]
        action: DailyInspectionCommands,
    },
    /// Employee weekly activity report records.
    ActivityReport {
        #[command(subcommand)]
        action: ActivityReportCommands,
    },
    /// Daily site report records.
    SiteReport {
        #[command(subcommand)]
        action: SiteReportCommands,
    },
    /// Print a starter JSON payload for a form.
    Template(TemplateArgs),
    /// Print the JSON schema for a payload type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct TemplateArgs {
    /// Form name (e.g. monthly_checklist, daily_inspection, site_report).
    pub form: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Payload type name (e.g. maintenance_log, activity_report, sign_up).
    pub type_name: String,
}
