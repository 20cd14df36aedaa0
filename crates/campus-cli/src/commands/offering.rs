use campus_core::identity::require_admin;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::OfferingCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct UnassignResponse<'a> {
    course_id: &'a str,
    university_id: &'a str,
    removed: bool,
}

/// Handle `campus offering`.
pub async fn handle(
    action: &OfferingCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        OfferingCommands::Assign {
            course,
            universities,
        } => {
            require_admin(ctx.principal.as_ref())?;
            let outcome = ctx.service.assign_course(course, universities).await?;
            if !outcome.skipped.is_empty() {
                tracing::info!(
                    skipped = outcome.skipped.len(),
                    "some universities already offered this course"
                );
            }
            output(&outcome, flags.format)
        }
        OfferingCommands::Unassign { course, university } => {
            require_admin(ctx.principal.as_ref())?;
            ctx.service.unassign_course(course, university).await?;
            output(
                &UnassignResponse {
                    course_id: course,
                    university_id: university,
                    removed: true,
                },
                flags.format,
            )
        }
        OfferingCommands::List => {
            let offerings = ctx.service.list_offerings().await?;
            output(&offerings, flags.format)
        }
    }
}
