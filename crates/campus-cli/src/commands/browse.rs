//! Listing pages: a query-seeded selection, narrowed by explicit flags.

use campus_catalog::filter::{
    filter_certifications, filter_courses, filter_universities, unique_locations,
};
use campus_catalog::{FilterOutcome, HierarchyIndex, QuerySeed};
use campus_core::enums::MenuKind;
use serde::Serialize;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BrowseArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct Listing<'a, T> {
    items: Vec<&'a T>,
    /// True when the active filters matched nothing.
    is_empty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    locations: Option<Vec<&'a str>>,
}

impl<'a, T> Listing<'a, T> {
    fn from_outcome(outcome: FilterOutcome<'a, T>) -> Self {
        Self {
            items: outcome.items,
            is_empty: outcome.is_empty,
            locations: None,
        }
    }
}

/// Handle `campus browse`.
pub async fn handle(
    args: &BrowseArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let view = browse(args, ctx).await?;
    output(&view, flags.format)
}

/// Build the listing or detail view as JSON.
///
/// Listings read through `load_snapshot`, so a table that cannot be read
/// shows up as an empty listing rather than an error.
async fn browse(args: &BrowseArgs, ctx: &AppContext) -> anyhow::Result<Value> {
    let kind = parse_enum::<MenuKind>(&args.target, "listing")?;
    let seed = args.query.as_deref().map(QuerySeed::parse).unwrap_or_default();

    let detail = match kind {
        MenuKind::Colleges => match seed.view.as_deref() {
            Some(id) => Some(serde_json::to_value(ctx.service.university_detail(id).await?)?),
            None => None,
        },
        MenuKind::Courses => match seed.course.as_deref() {
            Some(id) => Some(serde_json::to_value(ctx.service.course_detail(id).await?)?),
            None => None,
        },
        MenuKind::Certifications => match seed.certification_id.as_deref() {
            Some(id) => Some(serde_json::to_value(
                ctx.service.certification_detail(id).await?,
            )?),
            None => None,
        },
    };
    if let Some(detail) = detail {
        return Ok(detail);
    }

    let snapshot = ctx.service.load_snapshot().await;
    let view = match kind {
        MenuKind::Colleges => {
            let index = HierarchyIndex::new(&snapshot.courses, &snapshot.offerings);
            let mut filters = seed.university_filters();
            for stream in &args.stream {
                filters.streams.insert(stream.as_str());
            }
            for location in &args.location {
                filters.locations.insert(location.as_str());
            }

            let mut listing = Listing::from_outcome(filter_universities(
                &snapshot.universities,
                &filters,
                &index,
            ));
            listing.locations = Some(unique_locations(&snapshot.universities));
            serde_json::to_value(&listing)?
        }
        MenuKind::Courses => {
            let mut filters = seed.course_filters();
            for stream in &args.stream {
                filters.streams.insert(stream.as_str());
            }
            serde_json::to_value(Listing::from_outcome(filter_courses(
                &snapshot.courses,
                &filters,
            )))?
        }
        MenuKind::Certifications => {
            let mut filters = seed.certification_filters();
            for category in &args.category {
                filters.categories.insert(category.as_str());
            }
            serde_json::to_value(Listing::from_outcome(filter_certifications(
                &snapshot.certifications,
                &filters,
            )))?
        }
    };
    Ok(view)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use campus_config::CampusConfig;
    use campus_db::repos::course::NewCourse;
    use campus_db::repos::university::NewUniversity;
    use campus_db::service::CatalogService;
    use serde_json::json;

    use super::*;

    async fn context() -> AppContext {
        AppContext {
            service: CatalogService::new_local(":memory:").await.unwrap(),
            config: CampusConfig::default(),
            project_root: PathBuf::from("."),
            principal: None,
        }
    }

    fn args(target: &str) -> BrowseArgs {
        BrowseArgs {
            target: target.to_string(),
            stream: Vec::new(),
            location: Vec::new(),
            category: Vec::new(),
            query: None,
        }
    }

    async fn drop_table(ctx: &AppContext, table: &str) {
        ctx.service
            .db()
            .conn()
            .execute(&format!("DROP TABLE {table}"), ())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn unreadable_offerings_give_an_empty_college_listing() {
        let ctx = context().await;
        let stream = ctx.service.create_stream("Engineering").await.unwrap();
        ctx.service
            .create_university(&NewUniversity {
                name: "Northfield".into(),
                location: "Pune".into(),
                ..NewUniversity::default()
            })
            .await
            .unwrap();
        drop_table(&ctx, "university_courses").await;

        let mut filtered = args("colleges");
        filtered.stream = vec![stream.id];
        let view = browse(&filtered, &ctx).await.unwrap();

        assert_eq!(view["items"], json!([]));
        assert_eq!(view["is_empty"], json!(true));
        assert_eq!(view["locations"], json!(["Pune"]));
    }

    #[tokio::test]
    async fn unreadable_tables_give_empty_listings() {
        let ctx = context().await;
        drop_table(&ctx, "university_courses").await;
        drop_table(&ctx, "universities").await;
        drop_table(&ctx, "certification_courses").await;

        let colleges = browse(&args("colleges"), &ctx).await.unwrap();
        assert_eq!(colleges["items"], json!([]));
        assert_eq!(colleges["locations"], json!([]));

        let certifications = browse(&args("certifications"), &ctx).await.unwrap();
        assert_eq!(certifications["is_empty"], json!(true));
    }

    #[tokio::test]
    async fn course_listing_filters_by_stream() {
        let ctx = context().await;
        let engineering = ctx.service.create_stream("Engineering").await.unwrap();
        let medical = ctx.service.create_stream("Medical").await.unwrap();
        for (name, stream) in [("BTech", &engineering), ("MBBS", &medical)] {
            ctx.service
                .create_course(&NewCourse {
                    name: name.into(),
                    stream_id: stream.id.clone(),
                    ..NewCourse::default()
                })
                .await
                .unwrap();
        }

        let mut filtered = args("courses");
        filtered.query = Some(format!("?stream={}", medical.id));
        let view = browse(&filtered, &ctx).await.unwrap();

        assert_eq!(view["items"].as_array().unwrap().len(), 1);
        assert_eq!(view["items"][0]["name"], json!("MBBS"));
    }
}
