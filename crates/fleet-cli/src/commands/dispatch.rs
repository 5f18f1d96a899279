use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(action, ctx, flags).await,
        Commands::Forms => commands::forms::handle(ctx, flags).await,
        Commands::MaintenanceLog { action } => {
            commands::maintenance_log::handle(action, ctx, flags).await
        }
        Commands::MaintenanceRequest { action } => {
            commands::maintenance_request::handle(action, ctx, flags).await
        }
        Commands::MovementRegister { action } => {
            commands::movement_register::handle(action, ctx, flags).await
        }
        Commands::MonthlyChecklist { action } => {
            commands::monthly_checklist::handle(action, ctx, flags).await
        }
        Commands::DailyInspection { action } => {
            commands::daily_inspection::handle(action, ctx, flags).await
        }
        Commands::ActivityReport { action } => {
            commands::activity_report::handle(action, ctx, flags).await
        }
        Commands::SiteReport { action } => commands::site_report::handle(action, ctx, flags).await,
        Commands::Template(_) | Commands::Schema(_) => {
            unreachable!("template/schema are pre-dispatched in main")
        }
    }
}
