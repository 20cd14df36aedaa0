use std::path::PathBuf;

use campus_catalog::QuerySeed;
use campus_core::entities::{EnquiryTarget, NewEnquiry};
use campus_core::enums::EnquiryKind;
use campus_core::identity::{require_admin, require_principal};
use campus_core::responses::ExportResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EnquiryCommands;
use crate::commands::shared::limit::list_limit;
use crate::commands::shared::parse::{clearable, parse_enum};
use crate::context::AppContext;
use crate::export::{enquiry_sheet, write_xlsx};
use crate::output::output;

/// Upper bound on rows fetched for an export.
const EXPORT_LIMIT: u32 = 100_000;

/// Handle `campus enquiry`.
pub async fn handle(
    action: &EnquiryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EnquiryCommands::Submit {
            name,
            phone,
            email,
            current_class,
            course,
            college,
            certification,
            query,
        } => {
            require_principal(ctx.principal.as_ref())?;
            let seed = query.as_deref().map(QuerySeed::parse).unwrap_or_default();
            let target = enquiry_target(
                certification.as_deref(),
                course.as_deref(),
                college.as_deref(),
                &seed,
            );
            let input = NewEnquiry {
                name: name.clone(),
                phone: phone.clone(),
                email: clearable(email.as_deref()).flatten(),
                current_class: clearable(current_class.as_deref()).flatten(),
                target,
            };
            let enquiry = ctx.service.submit_enquiry(&input).await?;
            output(&enquiry, flags.format)
        }
        EnquiryCommands::List { kind, limit } => {
            require_admin(ctx.principal.as_ref())?;
            let kind = parse_enum::<EnquiryKind>(kind, "kind")?;
            let limit = list_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let rows = ctx.service.enquiry_rows(kind, limit).await?;
            output(&rows, flags.format)
        }
        EnquiryCommands::Called { id, unset } => {
            require_admin(ctx.principal.as_ref())?;
            let enquiry = ctx.service.set_enquiry_called(id, !unset).await?;
            output(&enquiry, flags.format)
        }
        EnquiryCommands::Remark { id, text } => {
            require_admin(ctx.principal.as_ref())?;
            let enquiry = ctx.service.set_enquiry_remark(id, text).await?;
            output(&enquiry, flags.format)
        }
        EnquiryCommands::Export {
            kind,
            output: path,
        } => {
            require_admin(ctx.principal.as_ref())?;
            let kind = parse_enum::<EnquiryKind>(kind, "kind")?;
            let rows = ctx.service.enquiry_rows(kind, EXPORT_LIMIT).await?;
            let sheet = enquiry_sheet(kind, &rows);
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

/// What the enquiry is about. Flags win; the apply-page query fills in
/// whatever the flags leave out.
fn enquiry_target(
    certification: Option<&str>,
    course: Option<&str>,
    college: Option<&str>,
    seed: &QuerySeed,
) -> EnquiryTarget {
    let course = clearable(course).flatten();
    let college = clearable(college).flatten();

    let certification = certification.map(str::to_string).or_else(|| {
        if course.is_none() && college.is_none() {
            seed.certification_id.clone()
        } else {
            None
        }
    });
    if let Some(certification_course_id) = certification {
        return EnquiryTarget::Certification {
            certification_course_id,
        };
    }

    let (seed_course, seed_college) = seed.apply_form();
    EnquiryTarget::Course {
        course_id: course.or_else(|| seed_course.map(str::to_string)),
        college_id: college.or_else(|| seed_college.map(str::to_string)),
    }
}

/// Explicit `--output`, or the sheet's default file name in the export directory.
pub fn export_path(explicit: Option<&str>, export_dir: &str, file_name: &str) -> PathBuf {
    explicit.map_or_else(|| PathBuf::from(export_dir).join(file_name), PathBuf::from)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use campus_catalog::QuerySeed;
    use campus_core::entities::EnquiryTarget;

    use super::{enquiry_target, export_path};

    #[test]
    fn apply_query_prefills_course_and_college() {
        let seed = QuerySeed::parse("?course=crs-1&college=uni-2");
        assert_eq!(
            enquiry_target(None, None, None, &seed),
            EnquiryTarget::Course {
                course_id: Some("crs-1".into()),
                college_id: Some("uni-2".into()),
            }
        );
    }

    #[test]
    fn flags_override_the_apply_query() {
        let seed = QuerySeed::parse("?course=crs-1&college=uni-2");
        assert_eq!(
            enquiry_target(None, None, Some("uni-9"), &seed),
            EnquiryTarget::Course {
                course_id: Some("crs-1".into()),
                college_id: Some("uni-9".into()),
            }
        );
    }

    #[test]
    fn certification_query_only_applies_without_course_flags() {
        let seed = QuerySeed::parse("?certification_id=crt-3");
        assert_eq!(
            enquiry_target(None, None, None, &seed),
            EnquiryTarget::Certification {
                certification_course_id: "crt-3".into(),
            }
        );
        assert!(matches!(
            enquiry_target(None, Some("crs-1"), None, &seed),
            EnquiryTarget::Course { .. }
        ));
    }

    #[test]
    fn export_path_prefers_explicit_output() {
        assert_eq!(
            export_path(Some("/tmp/out.xlsx"), "exports", "students.xlsx"),
            PathBuf::from("/tmp/out.xlsx")
        );
        assert_eq!(
            export_path(None, "exports", "students.xlsx"),
            PathBuf::from("exports/students.xlsx")
        );
    }
}
