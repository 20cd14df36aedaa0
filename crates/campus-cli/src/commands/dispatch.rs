use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Stream { action } => commands::stream::handle(&action, ctx, flags).await,
        Commands::Course { action } => commands::course::handle(&action, ctx, flags).await,
        Commands::University { action } => commands::university::handle(&action, ctx, flags).await,
        Commands::Offering { action } => commands::offering::handle(&action, ctx, flags).await,
        Commands::Certification { action } => {
            commands::certification::handle(&action, ctx, flags).await
        }
        Commands::Enquiry { action } => commands::enquiry::handle(&action, ctx, flags).await,
        Commands::Student { action } => commands::student::handle(&action, ctx, flags).await,
        Commands::News { action } => commands::news::handle(&action, ctx, flags).await,
        Commands::Newsletter { action } => commands::newsletter::handle(&action, ctx, flags).await,
        Commands::Menu(args) => commands::menu::handle(&args, ctx, flags).await,
        Commands::Browse(args) => commands::browse::handle(&args, ctx, flags).await,
        Commands::Overview(args) => commands::overview::handle(&args, ctx, flags).await,
        Commands::Whoami => commands::whoami::handle(ctx, flags),
        Commands::Init(_) => unreachable!("init is pre-dispatched in main"),
    }
}
