use campus_catalog::filter::{CertificationFilters, filter_certifications};
use campus_core::identity::require_admin;
use campus_db::repos::certification::NewCertificationCourse;
use campus_db::updates::certification::CertificationUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{CategoryCommands, CertificationCommands};
use crate::commands::shared::Deleted;
use crate::commands::shared::parse::clearable;
use crate::context::AppContext;
use crate::output::output;

/// Handle `campus certification`.
pub async fn handle(
    action: &CertificationCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CertificationCommands::Category { action } => handle_category(action, ctx, flags).await,
        CertificationCommands::Create {
            name,
            category,
            overview,
            duration,
        } => {
            require_admin(ctx.principal.as_ref())?;
            let input = NewCertificationCourse {
                name: name.clone(),
                category_id: category.clone(),
                overview: clearable(overview.as_deref()).flatten(),
                duration: clearable(duration.as_deref()).flatten(),
            };
            let course = ctx.service.create_certification_course(&input).await?;
            output(&course, flags.format)
        }
        CertificationCommands::Update {
            id,
            name,
            category,
            overview,
            duration,
        } => {
            require_admin(ctx.principal.as_ref())?;
            let mut builder = CertificationUpdateBuilder::new();
            if let Some(name) = name {
                builder = builder.name(name.as_str());
            }
            if let Some(category) = category {
                builder = builder.category_id(category.as_str());
            }
            if let Some(overview) = clearable(overview.as_deref()) {
                builder = builder.overview(overview);
            }
            if let Some(duration) = clearable(duration.as_deref()) {
                builder = builder.duration(duration);
            }
            let course = ctx
                .service
                .update_certification_course(id, builder.build())
                .await?;
            output(&course, flags.format)
        }
        CertificationCommands::List { category } => {
            let courses = ctx.service.list_certification_courses().await?;
            let filters = CertificationFilters {
                categories: category.iter().cloned().collect(),
            };
            let listing = filter_certifications(&courses, &filters);
            output(&listing.items, flags.format)
        }
        CertificationCommands::Get { id } => {
            let detail = ctx.service.certification_detail(id).await?;
            output(&detail, flags.format)
        }
        CertificationCommands::Delete { id } => {
            require_admin(ctx.principal.as_ref())?;
            ctx.service.delete_certification_course(id).await?;
            output(&Deleted::new(id), flags.format)
        }
    }
}

async fn handle_category(
    action: &CategoryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CategoryCommands::List => {
            let categories = ctx.service.list_certification_categories().await?;
            output(&categories, flags.format)
        }
        CategoryCommands::Create { name } => {
            require_admin(ctx.principal.as_ref())?;
            let category = ctx.service.create_certification_category(name).await?;
            output(&category, flags.format)
        }
        CategoryCommands::Delete { id } => {
            require_admin(ctx.principal.as_ref())?;
            ctx.service.delete_certification_category(id).await?;
            output(&Deleted::new(id), flags.format)
        }
    }
}
