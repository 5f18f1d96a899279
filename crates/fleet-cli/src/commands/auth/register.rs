use serde::Serialize;

use fleet_core::entities::SignUp;
use fleet_core::enums::Role;
use fleet_store::{AuthAction, AuthStore};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthRegisterArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct RegisterResponse {
    registered: bool,
    email: String,
    message: String,
}

pub async fn run(
    args: &AuthRegisterArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let payload = SignUp {
        first_name: args.first_name.clone(),
        last_name: args.last_name.clone(),
        role: parse_role(&args.role)?,
        designation: args.designation.clone(),
        user_img: args.user_img.clone(),
        email: args.email.clone(),
        password: args.password.clone(),
    };
    payload.validate()?;

    let mut store = AuthStore::new();
    store.begin(AuthAction::SignUp);

    let message = match ctx.api.sign_up(&payload).await {
        Ok(message) => message,
        Err(error) => {
            store.fail(AuthAction::SignUp, error.to_string());
            return Err(error.into());
        }
    };
    store.complete_sign_up();

    // Cache the email so `auth verify-otp` does not need it repeated.
    if let Err(error) = fleet_auth::pending::store_email(&args.email) {
        tracing::warn!(%error, "failed to cache registration email");
    }

    output(
        &RegisterResponse {
            registered: true,
            email: args.email.clone(),
            message,
        },
        flags.format,
    )
}

fn parse_role(value: &str) -> anyhow::Result<Role> {
    match value.to_ascii_lowercase().as_str() {
        "admin" => Ok(Role::Admin),
        "driver" => Ok(Role::Driver),
        "employee" => Ok(Role::Employee),
        other => anyhow::bail!("unknown role '{other}' (expected admin, driver, or employee)"),
    }
}

#[cfg(test)]
mod tests {
    use fleet_core::enums::Role;

    use super::parse_role;

    #[test]
    fn roles_parse_case_insensitively() {
        assert_eq!(parse_role("Driver").unwrap(), Role::Driver);
        assert_eq!(parse_role("ADMIN").unwrap(), Role::Admin);
        assert_eq!(parse_role("employee").unwrap(), Role::Employee);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let err = parse_role("mechanic").unwrap_err();
        assert!(err.to_string().contains("mechanic"));
    }
}
