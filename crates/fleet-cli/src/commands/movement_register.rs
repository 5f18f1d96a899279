use serde_json::json;

use fleet_core::dates::parse_user_date;
use fleet_core::entities::{MovementRegister, MovementRegisterDraft};
use fleet_core::enums::{CrudOp, FormKind};
use fleet_store::EntityStore;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MovementRegisterCommands;
use crate::commands::shared::{access, confirm, paging};
use crate::context::AppContext;
use crate::output::output;

/// Handle `flt movement-register`. `km` is always derived from the meter
/// readings, on create and again after an update touches either meter.
pub async fn handle(
    action: MovementRegisterCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    access::require_access(ctx, FormKind::MovementRegister).await?;
    let mut store = EntityStore::<MovementRegister>::new();

    match action {
        MovementRegisterCommands::Create {
            veh_number,
            month,
            week,
            date_from,
            date_to,
            meter_start,
            meter_end,
            security_name,
        } => {
            let draft = MovementRegisterDraft::new(
                veh_number,
                month,
                week,
                parse_user_date(&date_from)?,
                parse_user_date(&date_to)?,
                meter_start,
                meter_end,
                security_name,
            );
            draft.validate()?;

            store.begin(CrudOp::Create);
            let record = match ctx.api.create_movement_register(&draft).await {
                Ok(record) => record,
                Err(error) => {
                    store.fail(CrudOp::Create, error.to_string());
                    return Err(error.into());
                }
            };
            store.complete_create(record.clone());
            output(&record, flags.format)
        }
        MovementRegisterCommands::Get { id } => {
            store.begin(CrudOp::Get);
            let record = match ctx.api.get_movement_register(&id).await {
                Ok(record) => record,
                Err(error) => {
                    store.fail(CrudOp::Get, error.to_string());
                    return Err(error.into());
                }
            };
            store.complete_get(record.clone());
            output(&record, flags.format)
        }
        MovementRegisterCommands::List { page } => {
            store.begin(CrudOp::List);
            let records = match ctx.api.list_movement_registers().await {
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
        MovementRegisterCommands::Update {
            id,
            veh_number,
            month,
            week,
            date_from,
            date_to,
            meter_start,
            meter_end,
            security_name,
        } => {
            let mut draft = ctx.api.get_movement_register(&id).await?.draft;
            if let Some(value) = veh_number {
                draft.veh_number = value;
            }
            if let Some(value) = month {
                draft.month = value;
            }
            if let Some(value) = week {
                draft.week = value;
            }
            if let Some(value) = date_from {
                draft.date_from = parse_user_date(&value)?;
            }
            if let Some(value) = date_to {
                draft.date_to = parse_user_date(&value)?;
            }
            if let Some(value) = meter_start {
                draft.meter_start = value;
            }
            if let Some(value) = meter_end {
                draft.meter_end = value;
            }
            if let Some(value) = security_name {
                draft.security_name = value;
            }
            draft.km = draft.meter_end.saturating_sub(draft.meter_start);
            draft.validate()?;

            store.begin(CrudOp::Update);
            let record = match ctx.api.update_movement_register(&id, &draft).await {
                Ok(record) => record,
                Err(error) => {
                    store.fail(CrudOp::Update, error.to_string());
                    return Err(error.into());
                }
            };
            store.complete_update(record.clone());
            output(&record, flags.format)
        }
        MovementRegisterCommands::Delete { id } => {
            confirm::confirm_delete(&id, flags.yes || ctx.config.general.assume_yes)?;

            store.begin(CrudOp::Delete);
            let deleted = match ctx.api.delete_movement_register(&id).await {
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
