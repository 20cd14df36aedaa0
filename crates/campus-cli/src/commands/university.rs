use campus_core::identity::require_admin;
use campus_db::repos::university::NewUniversity;
use campus_db::updates::university::UniversityUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UniversityCommands;
use crate::commands::shared::Deleted;
use crate::commands::shared::parse::clearable;
use crate::context::AppContext;
use crate::output::output;

/// Handle `campus university`.
pub async fn handle(
    action: &UniversityCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UniversityCommands::Create {
            name,
            location,
            image_url,
            logo_url,
            package,
            accreditation,
            description,
            about,
            website,
        } => {
            require_admin(ctx.principal.as_ref())?;
            let optional = |value: &Option<String>| clearable(value.as_deref()).flatten();
            let input = NewUniversity {
                name: name.clone(),
                location: location.clone(),
                image_url: optional(image_url),
                logo_url: optional(logo_url),
                package: optional(package),
                accreditation: optional(accreditation),
                description: optional(description),
                about: optional(about),
                website: optional(website),
            };
            let university = ctx.service.create_university(&input).await?;
            output(&university, flags.format)
        }
        UniversityCommands::Update {
            id,
            name,
            location,
            image_url,
            logo_url,
            package,
            accreditation,
            description,
            about,
            website,
        } => {
            require_admin(ctx.principal.as_ref())?;
            let mut builder = UniversityUpdateBuilder::new();
            if let Some(name) = name {
                builder = builder.name(name.as_str());
            }
            if let Some(location) = location {
                builder = builder.location(location.as_str());
            }
            if let Some(value) = clearable(image_url.as_deref()) {
                builder = builder.image_url(value);
            }
            if let Some(value) = clearable(logo_url.as_deref()) {
                builder = builder.logo_url(value);
            }
            if let Some(value) = clearable(package.as_deref()) {
                builder = builder.package(value);
            }
            if let Some(value) = clearable(accreditation.as_deref()) {
                builder = builder.accreditation(value);
            }
            if let Some(value) = clearable(description.as_deref()) {
                builder = builder.description(value);
            }
            if let Some(value) = clearable(about.as_deref()) {
                builder = builder.about(value);
            }
            if let Some(value) = clearable(website.as_deref()) {
                builder = builder.website(value);
            }
            let university = ctx.service.update_university(id, builder.build()).await?;
            output(&university, flags.format)
        }
        UniversityCommands::List => {
            let universities = ctx.service.list_universities().await?;
            output(&universities, flags.format)
        }
        UniversityCommands::Get { id } => {
            let detail = ctx.service.university_detail(id).await?;
            output(&detail, flags.format)
        }
        UniversityCommands::Delete { id } => {
            require_admin(ctx.principal.as_ref())?;
            ctx.service.delete_university(id).await?;
            output(&Deleted::new(id), flags.format)
        }
    }
}
