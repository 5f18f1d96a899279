use serde_json::json;

use fleet_core::dates::parse_user_date;
use fleet_core::entities::{MaintenanceRequest, MaintenanceRequestDraft};
use fleet_core::enums::{CrudOp, FormKind};
use fleet_store::EntityStore;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MaintenanceRequestCommands;
use crate::commands::shared::{access, confirm, paging};
use crate::context::AppContext;
use crate::output::output;

/// Handle `flt maintenance-request`. `performed_by_user` is always the
/// signed-in user, never a flag.
pub async fn handle(
    action: MaintenanceRequestCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = access::require_access(ctx, FormKind::MaintenanceRequest).await?;
    let mut store = EntityStore::<MaintenanceRequest>::new();

    match action {
        MaintenanceRequestCommands::Create {
            veh_number,
            filled_by,
            report_date,
            description_of_problem,
            mechanic_notes,
            completed_date,
            mechanic_name,
        } => {
            let draft = MaintenanceRequestDraft {
                veh_number,
                filled_by,
                report_date: parse_user_date(&report_date)?,
                description_of_problem,
                mechanic_notes,
                completed_date: parse_user_date(&completed_date)?,
                mechanic_name,
                performed_by_user: user.id,
            };
            draft.validate()?;

            store.begin(CrudOp::Create);
            let record = match ctx.api.create_maintenance_request(&draft).await {
                Ok(record) => record,
                Err(error) => {
                    store.fail(CrudOp::Create, error.to_string());
                    return Err(error.into());
                }
            };
            store.complete_create(record.clone());
            output(&record, flags.format)
        }
        MaintenanceRequestCommands::Get { id } => {
            store.begin(CrudOp::Get);
            let record = match ctx.api.get_maintenance_request(&id).await {
                Ok(record) => record,
                Err(error) => {
                    store.fail(CrudOp::Get, error.to_string());
                    return Err(error.into());
                }
            };
            store.complete_get(record.clone());
            output(&record, flags.format)
        }
        MaintenanceRequestCommands::List { page } => {
            store.begin(CrudOp::List);
            let records = match ctx.api.list_maintenance_requests().await {
                Ok(records) => records,
                Err(error) => {
                    store.fail(CrudOp::List, error.to_string());
                    return Err(error.into());
                }
            };
            store.complete_list(records);

            let limit = paging::effective_limit(flags.limit, ctx.config.general.page_size);
            output(&paging::paginate(&store.all, page, limit), flags.format)
        }
        MaintenanceRequestCommands::Update {
            id,
            veh_number,
            filled_by,
            report_date,
            description_of_problem,
            mechanic_notes,
            completed_date,
            mechanic_name,
        } => {
            let mut draft = ctx.api.get_maintenance_request(&id).await?.draft;
            if let Some(value) = veh_number {
                draft.veh_number = value;
            }
            if let Some(value) = filled_by {
                draft.filled_by = value;
            }
            if let Some(value) = report_date {
                draft.report_date = parse_user_date(&value)?;
            }
            if let Some(value) = description_of_problem {
                draft.description_of_problem = value;
            }
            if let Some(value) = mechanic_notes {
                draft.mechanic_notes = value;
            }
            if let Some(value) = completed_date {
                draft.completed_date = parse_user_date(&value)?;
            }
            if let Some(value) = mechanic_name {
                draft.mechanic_name = value;
            }
            draft.validate()?;

            store.begin(CrudOp::Update);
            let record = match ctx.api.update_maintenance_request(&id, &draft).await {
                Ok(record) => record,
                Err(error) => {
                    store.fail(CrudOp::Update, error.to_string());
                    return Err(error.into());
                }
            };
            store.complete_update(record.clone());
            output(&record, flags.format)
        }
        MaintenanceRequestCommands::Delete { id } => {
            confirm::confirm_delete(&id, flags.yes || ctx.config.general.assume_yes)?;

            store.begin(CrudOp::Delete);
            let deleted = match ctx.api.delete_maintenance_request(&id).await {
                Ok(deleted) => deleted,
                Err(error) => {
                    store.fail(CrudOp::Delete, error.to_string());
                    return Err(error.into());
                }
            };
            store.complete_delete(&deleted);
            output(&json!({ "deleted": deleted }), flags.format)
        }
    }
}
