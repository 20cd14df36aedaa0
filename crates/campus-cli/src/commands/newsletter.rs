use campus_core::identity::require_admin;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::NewsletterCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `campus newsletter`.
pub async fn handle(
    action: &NewsletterCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        NewsletterCommands::Subscribe { email } => {
            let subscription = ctx.service.subscribe(email).await?;
            output(&subscription, flags.format)
        }
        NewsletterCommands::List => {
            require_admin(ctx.principal.as_ref())?;
            let subscriptions = ctx.service.list_subscriptions().await?;
            output(&subscriptions, flags.format)
        }
    }
}
