use fleet_core::entities::user::User;
use fleet_core::enums::FormKind;

use crate::context::AppContext;

/// Fetch the signed-in user and check their role may open `form`.
///
/// Entity commands call this before touching records, mirroring the
/// role-gated navigation: a driver never sees the site report form, an
/// employee never sees the movement register.
pub async fn require_access(ctx: &AppContext, form: FormKind) -> anyhow::Result<User> {
    let user = ctx.api.signed_in_user().await?;
    if !user.role.can_access(form) {
        anyhow::bail!(
            "role '{}' has no access to the {} form",
            user.role,
            form.title()
        );
    }
    Ok(user)
}
