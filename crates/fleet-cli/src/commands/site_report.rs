use serde_json::json;

use fleet_core::entities::{SiteReport, SiteReportDraft};
use fleet_core::enums::{CrudOp, FormKind};
use fleet_store::EntityStore;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SiteReportCommands;
use crate::commands::shared::{access, confirm, paging, payload};
use crate::context::AppContext;
use crate::output::output;

/// Handle `flt site-report`.
pub async fn handle(
    action: SiteReportCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = access::require_access(ctx, FormKind::SiteReport).await?;
    let mut store = EntityStore::<SiteReport>::new();

    match action {
        SiteReportCommands::Create { file } => {
            let mut draft: SiteReportDraft = payload::read_draft(&file)?;
            draft.performed_by_user = user.id;
            draft.validate()?;

            store.begin(CrudOp::Create);
            let record = match ctx.api.create_site_report(&draft).await {
                Ok(record) => record,
                Err(error) => {
                    store.fail(CrudOp::Create, error.to_string());
                    return Err(error.into());
                }
            };
            store.complete_create(record.clone());
            output(&record, flags.format)
        }
        SiteReportCommands::Get { id } => {
            store.begin(CrudOp::Get);
            let record = match ctx.api.get_site_report(&id).await {
                Ok(record) => record,
                Err(error) => {
                    store.fail(CrudOp::Get, error.to_string());
                    return Err(error.into());
                }
            };
            store.complete_get(record.clone());
            output(&record, flags.format)
        }
        SiteReportCommands::List { page } => {
            store.begin(CrudOp::List);
            let records = match ctx.api.list_site_reports().await {
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
        SiteReportCommands::Update { id, file } => {
            let mut draft: SiteReportDraft = payload::read_draft(&file)?;
            draft.performed_by_user = user.id;
            draft.validate()?;

            store.begin(CrudOp::Update);
            let record = match ctx.api.update_site_report(&id, &draft).await {
                Ok(record) => record,
                Err(error) => {
                    store.fail(CrudOp::Update, error.to_string());
                    return Err(error.into());
                }
            };
            store.complete_update(record.clone());
            output(&record, flags.format)
        }
        SiteReportCommands::Delete { id } => {
            confirm::confirm_delete(&id, flags.yes || ctx.config.general.assume_yes)?;

            store.begin(CrudOp::Delete);
            let deleted = match ctx.api.delete_site_report(&id).await {
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
