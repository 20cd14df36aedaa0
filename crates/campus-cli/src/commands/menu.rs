use campus_catalog::HierarchyIndex;
use campus_catalog::menu::{certifications_menu, colleges_menu, courses_menu};
use campus_core::enums::{Breakpoint, MenuKind};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MenuArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `campus menu`.
pub async fn handle(
    args: &MenuArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let kind = parse_enum::<MenuKind>(&args.target, "menu")?;
    let breakpoint = resolve_breakpoint(args.width, args.breakpoint.as_deref())?;
    let active = args.active.as_deref();
    let limits = &ctx.config.menu;

    let snapshot = ctx.service.load_snapshot().await;
    let menu = match kind {
        MenuKind::Courses => courses_menu(
            &snapshot.streams,
            &snapshot.courses,
            active,
            breakpoint,
            limits,
        ),
        MenuKind::Colleges => {
            let index = HierarchyIndex::new(&snapshot.courses, &snapshot.offerings);
            colleges_menu(
                &snapshot.streams,
                &snapshot.universities,
                &index,
                active,
                breakpoint,
                limits,
            )
        }
        MenuKind::Certifications => certifications_menu(
            &snapshot.categories,
            &snapshot.certifications,
            active,
            breakpoint,
            limits,
        ),
    };
    output(&menu, flags.format)
}

/// A pixel width wins over a named breakpoint; neither means the default.
fn resolve_breakpoint(width: Option<u32>, named: Option<&str>) -> anyhow::Result<Breakpoint> {
    match (width, named) {
        (Some(width), _) => Ok(Breakpoint::from_width(width)),
        (None, Some(named)) => parse_enum(named, "breakpoint"),
        (None, None) => Ok(Breakpoint::default()),
    }
}

#[cfg(test)]
mod tests {
    use campus_core::enums::Breakpoint;

    use super::resolve_breakpoint;

    #[test]
    fn width_is_classified() {
        assert_eq!(resolve_breakpoint(Some(500), None).unwrap(), Breakpoint::Sm);
        assert_eq!(resolve_breakpoint(Some(1300), None).unwrap(), Breakpoint::Xxl);
    }

    #[test]
    fn named_breakpoint_and_default() {
        assert_eq!(resolve_breakpoint(None, Some("xl")).unwrap(), Breakpoint::Xl);
        assert_eq!(resolve_breakpoint(None, None).unwrap(), Breakpoint::Lg);
        assert!(resolve_breakpoint(None, Some("huge")).is_err());
    }
}
