use serde_json::json;

use fleet_core::entities::{MonthlyChecklist, MonthlyChecklistDraft};
use fleet_core::enums::{CrudOp, FormKind};
use fleet_store::EntityStore;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MonthlyChecklistCommands;
use crate::commands::shared::{access, confirm, paging, payload};
use crate::context::AppContext;
use crate::output::output;

/// Handle `flt monthly-checklist`.
pub async fn handle(
    action: MonthlyChecklistCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = access::require_access(ctx, FormKind::MonthlyChecklist).await?;
    let mut store = EntityStore::<MonthlyChecklist>::new();

    match action {
        MonthlyChecklistCommands::Create { file } => {
            let mut draft: MonthlyChecklistDraft = payload::read_draft(&file)?;
            draft.performed_by_user = user.id;
            draft.validate()?;

            store.begin(CrudOp::Create);
            let record = match ctx.api.create_monthly_checklist(&draft).await {
                Ok(record) => record,
                Err(error) => {
                    store.fail(CrudOp::Create, error.to_string());
                    return Err(error.into());
                }
            };
            store.complete_create(record.clone());
            output(&record, flags.format)
        }
        MonthlyChecklistCommands::Get { id } => {
            store.begin(CrudOp::Get);
            let record = match ctx.api.get_monthly_checklist(&id).await {
                Ok(record) => record,
                Err(error) => {
                    store.fail(CrudOp::Get, error.to_string());
                    return Err(error.into());
                }
            };
            store.complete_get(record.clone());
            output(&record, flags.format)
        }
        MonthlyChecklistCommands::List { page } => {
            store.begin(CrudOp::List);
            let records = match ctx.api.list_monthly_checklists().await {
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
        MonthlyChecklistCommands::Update { id, file } => {
            let mut draft: MonthlyChecklistDraft = payload::read_draft(&file)?;
            draft.performed_by_user = user.id;
            draft.validate()?;

            store.begin(CrudOp::Update);
            let record = match ctx.api.update_monthly_checklist(&id, &draft).await {
                Ok(record) => record,
                Err(error) => {
                    store.fail(CrudOp::Update, error.to_string());
                    return Err(error.into());
                }
            };
            store.complete_update(record.clone());
            output(&record, flags.format)
        }
        MonthlyChecklistCommands::Delete { id } => {
            confirm::confirm_delete(&id, flags.yes || ctx.config.general.assume_yes)?;

            store.begin(CrudOp::Delete);
            let deleted = match ctx.api.delete_monthly_checklist(&id).await {
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
