use campus_core::identity::require_admin;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StreamCommands;
use crate::commands::shared::Deleted;
use crate::context::AppContext;
use crate::output::output;

/// Handle `campus stream`.
pub async fn handle(
    action: &StreamCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StreamCommands::List => {
            let streams = ctx.service.list_streams().await?;
            output(&streams, flags.format)
        }
        StreamCommands::Create { name } => {
            require_admin(ctx.principal.as_ref())?;
            let stream = ctx.service.create_stream(name).await?;
            output(&stream, flags.format)
        }
        StreamCommands::Delete { id } => {
            require_admin(ctx.principal.as_ref())?;
            ctx.service.delete_stream(id).await?;
            output(&Deleted::new(id), flags.format)
        }
    }
}
