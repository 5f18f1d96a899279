use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in with email and password.
    Login(AuthLoginArgs),
    /// Register a new account (an OTP is emailed to you).
    Register(AuthRegisterArgs),
    /// Verify the OTP emailed during registration.
    VerifyOtp(AuthVerifyOtpArgs),
    /// Ask the backend to email a fresh OTP.
    ResendOtp(AuthResendOtpArgs),
    /// Show the signed-in user.
    Whoami,
    /// Clear stored credentials.
    Logout,
    /// Show current auth status.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Account email.
    #[arg(long)]
    pub email: String,
    /// Account password.
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthRegisterArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    /// Account role: admin, driver, employee.
    #[arg(long)]
    pub role: String,
    #[arg(long)]
    pub designation: String,
    /// URL of an already-uploaded profile image.
    #[arg(long, default_value = "")]
    pub user_img: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthVerifyOtpArgs {
    /// The one-time code from the email.
    pub otp: String,
    /// Account email (defaults to the one cached by `auth register`).
    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AuthResendOtpArgs {
    /// Account email (defaults to the one cached by `auth register`).
    #[arg(long)]
    pub email: Option<String>,
}
