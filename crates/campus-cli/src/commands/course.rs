use campus_catalog::Selection;
use campus_catalog::filter::{CourseFilters, filter_courses};
use campus_core::documents::parse_document_text;
use campus_core::identity::require_admin;
use campus_db::repos::course::NewCourse;
use campus_db::updates::course::CourseUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CourseCommands;
use crate::commands::shared::Deleted;
use crate::commands::shared::parse::{clearable, clearable_document};
use crate::context::AppContext;
use crate::output::output;

/// Handle `campus course`.
pub async fn handle(
    action: &CourseCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CourseCommands::Create {
            name,
            stream,
            description,
            duration,
            syllabus,
            jobs_info,
        } => {
            require_admin(ctx.principal.as_ref())?;
            let input = NewCourse {
                name: name.clone(),
                stream_id: stream.clone(),
                description: clearable(description.as_deref()).flatten(),
                duration: clearable(duration.as_deref()).flatten(),
                syllabus: parse_document_text(syllabus.as_deref())?,
                jobs_info: parse_document_text(jobs_info.as_deref())?,
            };
            let course = ctx.service.create_course(&input).await?;
            output(&course, flags.format)
        }
        CourseCommands::Update {
            id,
            name,
            stream,
            description,
            duration,
            syllabus,
            jobs_info,
        } => {
            require_admin(ctx.principal.as_ref())?;
            let mut builder = CourseUpdateBuilder::new();
            if let Some(name) = name {
                builder = builder.name(name.as_str());
            }
            if let Some(stream) = stream {
                builder = builder.stream_id(stream.as_str());
            }
            if let Some(description) = clearable(description.as_deref()) {
                builder = builder.description(description);
            }
            if let Some(duration) = clearable(duration.as_deref()) {
                builder = builder.duration(duration);
            }
            if let Some(syllabus) = clearable_document(syllabus.as_deref())? {
                builder = builder.syllabus(syllabus);
            }
            if let Some(jobs_info) = clearable_document(jobs_info.as_deref())? {
                builder = builder.jobs_info(jobs_info);
            }
            let course = ctx.service.update_course(id, builder.build()).await?;
            output(&course, flags.format)
        }
        CourseCommands::List { stream } => {
            let courses = ctx.service.list_courses().await?;
            let filters = CourseFilters {
                streams: stream.iter().cloned().collect::<Selection>(),
            };
            let listing = filter_courses(&courses, &filters);
            output(&listing.items, flags.format)
        }
        CourseCommands::Get { id } => {
            let detail = ctx.service.course_detail(id).await?;
            output(&detail, flags.format)
        }
        CourseCommands::Delete { id } => {
            require_admin(ctx.principal.as_ref())?;
            ctx.service.delete_course(id).await?;
            output(&Deleted::new(id), flags.format)
        }
    }
}
