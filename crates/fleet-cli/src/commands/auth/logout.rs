use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct LogoutResponse {
    signed_out: bool,
}

pub fn run(flags: &GlobalFlags) -> anyhow::Result<()> {
    fleet_auth::logout()?;
    output(&LogoutResponse { signed_out: true }, flags.format)
}
