use campus_core::identity::require_admin;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::OverviewArgs;
use crate::commands::shared::parse::parse_date;
use crate::context::AppContext;
use crate::output::output;

/// Handle `campus overview`.
pub async fn handle(
    args: &OverviewArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_admin(ctx.principal.as_ref())?;
    let today = match args.date.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => chrono::Utc::now().date_naive(),
    };
    let stats = ctx.service.overview_stats(today).await?;
    output(&stats, flags.format)
}
