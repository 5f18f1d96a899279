use serde::Serialize;

use fleet_core::entities::OtpVerification;
use fleet_store::{AuthAction, AuthStore};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::{AuthResendOtpArgs, AuthVerifyOtpArgs};
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct OtpResponse {
    email: String,
    message: String,
}

pub async fn verify(
    args: &AuthVerifyOtpArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let email = resolve_email(args.email.as_deref())?;
    let payload = OtpVerification {
        email: email.clone(),
        otp: args.otp.clone(),
    };
    payload.validate()?;

    let mut store = AuthStore::new();
    store.begin(AuthAction::VerifyOtp);

    let message = match ctx.api.verify_otp(&payload).await {
        Ok(message) => message,
        Err(error) => {
            store.fail(AuthAction::VerifyOtp, error.to_string());
            return Err(error.into());
        }
    };
    store.complete_verify_otp();

    if let Err(error) = fleet_auth::pending::clear_email() {
        tracing::warn!(%error, "failed to clear cached registration email");
    }

    output(&OtpResponse { email, message }, flags.format)
}

pub async fn resend(
    args: &AuthResendOtpArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let email = resolve_email(args.email.as_deref())?;

    let mut store = AuthStore::new();
    store.begin(AuthAction::ResendOtp);

    let message = match ctx.api.resend_otp(&email).await {
        Ok(message) => message,
        Err(error) => {
            store.fail(AuthAction::ResendOtp, error.to_string());
            return Err(error.into());
        }
    };
    store.complete_resend_otp();

    output(&OtpResponse { email, message }, flags.format)
}

/// `--email` wins; otherwise fall back to the email cached by `auth register`.
fn resolve_email(flag: Option<&str>) -> anyhow::Result<String> {
    if let Some(email) = flag {
        return Ok(email.to_string());
    }
    fleet_auth::pending::load_email()
        .ok_or_else(|| anyhow::anyhow!("no cached registration email; pass --email"))
}
