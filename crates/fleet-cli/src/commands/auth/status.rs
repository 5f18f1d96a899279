use serde::Serialize;

use fleet_api::ApiError;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct StatusResponse {
    authenticated: bool,
    token_source: Option<String>,
    email: Option<String>,
    role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let token_source = fleet_auth::token_store::source().map(|source| source.to_string());

    if token_source.is_none() {
        return output(
            &StatusResponse {
                authenticated: false,
                token_source: None,
                email: None,
                role: None,
                note: Some("no stored token; run `flt auth login`".into()),
            },
            flags.format,
        );
    }

    // A stored token can still be stale; the session lookup is the truth.
    let response = match ctx.api.signed_in_user().await {
        Ok(user) => StatusResponse {
            authenticated: true,
            token_source,
            email: Some(user.email),
            role: Some(user.role.to_string()),
            note: None,
        },
        Err(ApiError::SessionExpired) => StatusResponse {
            authenticated: false,
            token_source,
            email: None,
            role: None,
            note: Some("stored token was rejected; run `flt auth login` again".into()),
        },
        Err(error) => return Err(error.into()),
    };

    output(&response, flags.format)
}
