use campus_core::enums::Role;
use campus_core::identity::{require_admin, require_principal};
use campus_core::responses::ExportResponse;
use campus_db::repos::profile::NewProfile;
use campus_db::updates::profile::ProfileUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StudentCommands;
use crate::commands::enquiry::export_path;
use crate::commands::shared::limit::list_limit;
use crate::commands::shared::parse::{clearable, parse_enum};
use crate::context::AppContext;
use crate::export::{profile_sheet, write_xlsx};
use crate::output::output;

const EXPORT_LIMIT: u32 = 100_000;

/// Handle `campus student`.
pub async fn handle(
    action: &StudentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StudentCommands::Register {
            id,
            name,
            email,
            phone,
            current_class,
        } => {
            let input = NewProfile {
                id: id.clone(),
                name: name.clone(),
                email: email.clone(),
                phone: clearable(phone.as_deref()).flatten(),
                current_class: clearable(current_class.as_deref()).flatten(),
            };
            let profile = ctx.service.register_profile(&input).await?;
            output(&profile, flags.format)
        }
        StudentCommands::Update {
            name,
            phone,
            current_class,
        } => {
            let principal = require_principal(ctx.principal.as_ref())?;
            if name.is_none() && phone.is_none() && current_class.is_none() {
                anyhow::bail!("At least one of --name, --phone, or --class must be provided");
            }
            let mut builder = ProfileUpdateBuilder::new();
            if let Some(name) = name {
                builder = builder.name(name.as_str());
            }
            if let Some(phone) = clearable(phone.as_deref()) {
                builder = builder.phone(phone);
            }
            if let Some(current_class) = clearable(current_class.as_deref()) {
                builder = builder.current_class(current_class);
            }
            let profile = ctx
                .service
                .update_profile(&principal.id, builder.build())
                .await?;
            output(&profile, flags.format)
        }
        StudentCommands::List { limit } => {
            require_admin(ctx.principal.as_ref())?;
            let limit = list_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let profiles = ctx.service.list_profiles(limit).await?;
            output(&profiles, flags.format)
        }
        StudentCommands::Get { id } => {
            let principal = require_principal(ctx.principal.as_ref())?;
            if principal.id != *id {
                require_admin(Some(principal))?;
            }
            let profile = ctx.service.get_profile(id).await?;
            output(&profile, flags.format)
        }
        StudentCommands::Remark { id, text } => {
            require_admin(ctx.principal.as_ref())?;
            let profile = ctx.service.set_admin_remark(id, Some(text.as_str())).await?;
            output(&profile, flags.format)
        }
        StudentCommands::Role { id, role } => {
            require_admin(ctx.principal.as_ref())?;
            let role = parse_enum::<Role>(role, "role")?;
            let profile = ctx.service.set_role(id, role).await?;
            output(&profile, flags.format)
        }
        StudentCommands::Export { output: path } => {
            require_admin(ctx.principal.as_ref())?;
            let profiles = ctx.service.list_profiles(EXPORT_LIMIT).await?;
            let sheet = profile_sheet(&profiles);
            let path = export_path(
                path.as_deref(),
                &ctx.config.general.export_dir,
                sheet.file_name,
            );
            write_xlsx(&path, &sheet)?;
            output(
                &ExportResponse {
                    path: path.display().to_string(),
                    sheet: sheet.name.to_string(),
                    rows: sheet.rows.len(),
                },
                flags.format,
            )
        }
    }
}
