use serde::Serialize;

use fleet_core::entities::user::Credentials;
use fleet_store::{AuthAction, AuthStore};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct LoginResponse {
    authenticated: bool,
    email: String,
    role: String,
    name: String,
}

pub async fn run(args: &AuthLoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let credentials = Credentials {
        email: args.email.clone(),
        password: args.password.clone(),
    };
    credentials.validate()?;

    let mut store = AuthStore::new();
    store.begin(AuthAction::SignIn);

    let session = match ctx.api.sign_in(&credentials).await {
        Ok(session) => session,
        Err(error) => {
            store.fail(AuthAction::SignIn, error.to_string());
            return Err(error.into());
        }
    };

    fleet_auth::token_store::store(&session.token.access_token)?;
    store.complete_sign_in(session.token.access_token, session.user);

    // complete_sign_in just stored the user; signed-in state always has one.
    let Some(user) = store.user else {
        anyhow::bail!("sign-in completed without a user");
    };

    output(
        &LoginResponse {
            authenticated: true,
            email: user.email,
            role: user.role.to_string(),
            name: format!("{} {}", user.first_name, user.last_name),
        },
        flags.format,
    )
}
