use campus_core::identity::Principal;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct WhoamiResponse<'a> {
    signed_in: bool,
    principal: Option<&'a Principal>,
    project_root: String,
    remote_database: bool,
}

/// Handle `campus whoami`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(
        &WhoamiResponse {
            signed_in: ctx.principal.is_some(),
            principal: ctx.principal.as_ref(),
            project_root: ctx.project_root.display().to_string(),
            remote_database: ctx.service.db().is_remote(),
        },
        flags.format,
    )
}
