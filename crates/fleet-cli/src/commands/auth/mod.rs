use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;

mod login;
mod logout;
mod otp;
mod register;
mod status;
mod whoami;

/// Handle `flt auth`.
pub async fn handle(
    action: AuthCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::run(&args, ctx, flags).await,
        AuthCommands::Register(args) => register::run(&args, ctx, flags).await,
        AuthCommands::VerifyOtp(args) => otp::verify(&args, ctx, flags).await,
        AuthCommands::ResendOtp(args) => otp::resend(&args, ctx, flags).await,
        AuthCommands::Whoami => whoami::run(ctx, flags).await,
        AuthCommands::Logout => logout::run(flags),
        AuthCommands::Status => status::run(ctx, flags).await,
    }
}
