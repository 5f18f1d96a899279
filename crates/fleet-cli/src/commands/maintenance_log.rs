use serde_json::json;

use fleet_core::dates::parse_user_date;
use fleet_core::entities::{MaintenanceLog, MaintenanceLogDraft};
use fleet_core::enums::{CrudOp, FormKind};
use fleet_store::EntityStore;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MaintenanceLogCommands;
use crate::commands::shared::{access, confirm, paging};
use crate::context::AppContext;
use crate::output::output;

/// Handle `flt maintenance-log`.
pub async fn handle(
    action: MaintenanceLogCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    access::require_access(ctx, FormKind::MaintenanceLog).await?;
    let mut store = EntityStore::<MaintenanceLog>::new();

    match action {
        MaintenanceLogCommands::Create {
            make,
            model,
            year,
            veh_id_number,
            engine,
            date_of_service,
            mileage_of_service,
            performed_by_name,
            work_performed,
            cost,
            invoice,
            notes,
        } => {
            let draft = MaintenanceLogDraft {
                make,
                model,
                year,
                veh_id_number,
                engine,
                date_of_service: parse_user_date(&date_of_service)?,
                mileage_of_service,
                performed_by_name,
                work_performed_by_service_schedule: work_performed,
                cost,
                invoice,
                notes,
            };
            draft.validate()?;

            store.begin(CrudOp::Create);
            let record = match ctx.api.create_maintenance_log(&draft).await {
                Ok(record) => record,
                Err(error) => {
                    store.fail(CrudOp::Create, error.to_string());
                    return Err(error.into());
                }
            };
            store.complete_create(record.clone());
            output(&record, flags.format)
        }
        MaintenanceLogCommands::Get { id } => {
            store.begin(CrudOp::Get);
            let record = match ctx.api.get_maintenance_log(&id).await {
                Ok(record) => record,
                Err(error) => {
                    store.fail(CrudOp::Get, error.to_string());
                    return Err(error.into());
                }
            };
            store.complete_get(record.clone());
            output(&record, flags.format)
        }
        MaintenanceLogCommands::List { page } => {
            store.begin(CrudOp::List);
            let records = match ctx.api.list_maintenance_logs().await {
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
        MaintenanceLogCommands::Update {
            id,
            make,
            model,
            year,
            veh_id_number,
            engine,
            date_of_service,
            mileage_of_service,
            performed_by_name,
            work_performed,
            cost,
            invoice,
            notes,
        } => {
            let mut draft = ctx.api.get_maintenance_log(&id).await?.draft;
            if let Some(value) = make {
                draft.make = value;
            }
            if let Some(value) = model {
                draft.model = value;
            }
            if let Some(value) = year {
                draft.year = value;
            }
            if let Some(value) = veh_id_number {
                draft.veh_id_number = value;
            }
            if let Some(value) = engine {
                draft.engine = value;
            }
            if let Some(value) = date_of_service {
                draft.date_of_service = parse_user_date(&value)?;
            }
            if let Some(value) = mileage_of_service {
                draft.mileage_of_service = value;
            }
            if let Some(value) = performed_by_name {
                draft.performed_by_name = value;
            }
            if let Some(value) = work_performed {
                draft.work_performed_by_service_schedule = value;
            }
            if let Some(value) = cost {
                draft.cost = value;
            }
            if let Some(value) = invoice {
                draft.invoice = value;
            }
            if let Some(value) = notes {
                draft.notes = value;
            }
            draft.validate()?;

            store.begin(CrudOp::Update);
            let record = match ctx.api.update_maintenance_log(&id, &draft).await {
                Ok(record) => record,
                Err(error) => {
                    store.fail(CrudOp::Update, error.to_string());
                    return Err(error.into());
                }
            };
            store.complete_update(record.clone());
            output(&record, flags.format)
        }
        MaintenanceLogCommands::Delete { id } => {
            confirm::confirm_delete(&id, flags.yes || ctx.config.general.assume_yes)?;

            store.begin(CrudOp::Delete);
            let deleted = match ctx.api.delete_maintenance_log(&id).await {
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
