use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct FormEntry {
    name: &'static str,
    title: &'static str,
}

/// Handle `flt forms`: list the forms the signed-in user's role may open,
/// in navigation order.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = ctx.api.signed_in_user().await?;
    let entries = user
        .role
        .forms()
        .iter()
        .map(|form| FormEntry {
            name: form.as_str(),
            title: form.title(),
        })
        .collect::<Vec<_>>();
    output(&entries, flags.format)
}
