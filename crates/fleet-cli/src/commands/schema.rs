use schemars::schema_for;

use fleet_core::entities::{
    ActivityReportDraft, Credentials, DailyInspectionDraft, MaintenanceLogDraft,
    MaintenanceRequestDraft, MonthlyChecklistDraft, MovementRegisterDraft, SignUp, SiteReportDraft,
    User,
};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

const KNOWN_TYPES: &[&str] = &[
    "maintenance_log",
    "maintenance_request",
    "movement_register",
    "monthly_checklist",
    "daily_inspection",
    "activity_report",
    "site_report",
    "sign_in",
    "sign_up",
    "user",
];

/// Handle `flt schema`: print the JSON schema of a payload type.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name.as_str() {
        "maintenance_log" => schema_for!(MaintenanceLogDraft),
        "maintenance_request" => schema_for!(MaintenanceRequestDraft),
        "movement_register" => schema_for!(MovementRegisterDraft),
        "monthly_checklist" => schema_for!(MonthlyChecklistDraft),
        "daily_inspection" => schema_for!(DailyInspectionDraft),
        "activity_report" => schema_for!(ActivityReportDraft),
        "site_report" => schema_for!(SiteReportDraft),
        "sign_in" => schema_for!(Credentials),
        "sign_up" => schema_for!(SignUp),
        "user" => schema_for!(User),
        other => anyhow::bail!(
            "unknown type '{other}' (expected one of: {})",
            KNOWN_TYPES.join(", ")
        ),
    };

    output(&schema, flags.format)
}

#[cfg(test)]
mod tests {
    use crate::cli::GlobalFlags;
    use crate::cli::OutputFormat;
    use crate::cli::root_commands::SchemaArgs;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            quiet: false,
            verbose: false,
            yes: false,
        }
    }

    #[test]
    fn known_types_render() {
        for name in super::KNOWN_TYPES {
            let args = SchemaArgs {
                type_name: (*name).to_string(),
            };
            assert!(super::handle(&args, &flags()).is_ok(), "type {name}");
        }
    }

    #[test]
    fn unknown_type_lists_alternatives() {
        let args = SchemaArgs {
            type_name: "vehicle".into(),
        };
        let err = super::handle(&args, &flags()).unwrap_err();
        assert!(err.to_string().contains("maintenance_log"));
    }
}
