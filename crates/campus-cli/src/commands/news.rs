use campus_core::identity::require_admin;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::NewsCommands;
use crate::commands::shared::Deleted;
use crate::context::AppContext;
use crate::output::output;

/// Handle `campus news`.
pub async fn handle(
    action: &NewsCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        NewsCommands::List => {
            let items = ctx.service.list_news().await?;
            output(&items, flags.format)
        }
        NewsCommands::Add { content } => {
            require_admin(ctx.principal.as_ref())?;
            let item = ctx.service.add_news(content).await?;
            output(&item, flags.format)
        }
        NewsCommands::Update { id, content } => {
            require_admin(ctx.principal.as_ref())?;
            let item = ctx.service.update_news(id, content).await?;
            output(&item, flags.format)
        }
        NewsCommands::Delete { id } => {
            require_admin(ctx.principal.as_ref())?;
            ctx.service.delete_news(id).await?;
            output(&Deleted::new(id), flags.format)
        }
    }
}
