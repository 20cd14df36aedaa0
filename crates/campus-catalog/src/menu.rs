//! Header mega-menu composition.
//!
//! A menu is a column of categories (streams or certification categories)
//! beside a column of items (courses, colleges, or certification courses).
//! Both columns are capped by the breakpoint's limits; when anything is cut
//! off, `has_more` asks the caller to show the "view all" link.

use campus_core::entities::{
    CatalogRow, CertificationCategory, CertificationCourse, Course, Stream, University,
};
use campus_core::enums::{Breakpoint, MenuKind};
use campus_core::limits::MenuLimits;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::index::HierarchyIndex;

/// One link in either column.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MenuEntry {
    pub id: String,
    pub name: String,
    pub href: String,
}

/// What the item column should render.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MenuState {
    Items,
    /// The catalog has items, just none in the active category.
    EmptyForCategory,
    /// There is nothing in the catalog at all.
    EmptyCatalog,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MegaMenu {
    pub kind: MenuKind,
    pub breakpoint: Breakpoint,
    pub visible_categories: Vec<MenuEntry>,
    /// The category the items were restricted to, if it exists.
    pub active_category: Option<String>,
    pub visible_items: Vec<MenuEntry>,
    pub has_more: bool,
    pub view_all_href: String,
    pub state: MenuState,
}

/// Compose a menu from categories and items.
///
/// `belongs(item, category_id)` decides membership. An active ID that
/// matches no category is ignored and every item participates. Input order
/// is kept in both columns.
pub fn compose_menu<C, I, F>(
    kind: MenuKind,
    categories: &[C],
    items: &[I],
    active: Option<&str>,
    belongs: F,
    breakpoint: Breakpoint,
    limits: &MenuLimits,
) -> MegaMenu
where
    C: CatalogRow,
    I: CatalogRow,
    F: Fn(&I, &str) -> bool,
{
    let category_cap = limits.filter_count_for(breakpoint);
    let item_cap = limits.item_count_for(breakpoint);

    let active = active.filter(|id| categories.iter().any(|c| c.id() == *id));

    let filtered: Vec<&I> = match active {
        Some(category) => items.iter().filter(|&item| belongs(item, category)).collect(),
        None => items.iter().collect(),
    };

    let state = if items.is_empty() {
        MenuState::EmptyCatalog
    } else if filtered.is_empty() {
        MenuState::EmptyForCategory
    } else {
        MenuState::Items
    };

    let has_more = filtered.len() > item_cap || categories.len() > category_cap;

    tracing::debug!(
        %kind,
        %breakpoint,
        active = active.unwrap_or("-"),
        matched = filtered.len(),
        has_more,
        "composed mega-menu"
    );

    MegaMenu {
        kind,
        breakpoint,
        visible_categories: categories
            .iter()
            .take(category_cap)
            .map(|c| MenuEntry {
                id: c.id().to_string(),
                name: c.name().to_string(),
                href: kind.category_href(c.id()),
            })
            .collect(),
        active_category: active.map(str::to_string),
        visible_items: filtered
            .into_iter()
            .take(item_cap)
            .map(|item| MenuEntry {
                id: item.id().to_string(),
                name: item.name().to_string(),
                href: kind.item_href(item.id()),
            })
            .collect(),
        has_more,
        view_all_href: kind.listing_path().to_string(),
        state,
    }
}

/// Streams beside courses.
#[must_use]
pub fn courses_menu(
    streams: &[Stream],
    courses: &[Course],
    active: Option<&str>,
    breakpoint: Breakpoint,
    limits: &MenuLimits,
) -> MegaMenu {
    compose_menu(
        MenuKind::Courses,
        streams,
        courses,
        active,
        |course, stream| course.stream_id.as_deref() == Some(stream),
        breakpoint,
        limits,
    )
}

/// Streams beside colleges. Membership comes from offered courses.
#[must_use]
pub fn colleges_menu(
    streams: &[Stream],
    universities: &[University],
    index: &HierarchyIndex,
    active: Option<&str>,
    breakpoint: Breakpoint,
    limits: &MenuLimits,
) -> MegaMenu {
    compose_menu(
        MenuKind::Colleges,
        streams,
        universities,
        active,
        |university, stream| index.university_in_stream(&university.id, stream),
        breakpoint,
        limits,
    )
}

/// Certification categories beside certification courses.
#[must_use]
pub fn certifications_menu(
    categories: &[CertificationCategory],
    courses: &[CertificationCourse],
    active: Option<&str>,
    breakpoint: Breakpoint,
    limits: &MenuLimits,
) -> MegaMenu {
    compose_menu(
        MenuKind::Certifications,
        categories,
        courses,
        active,
        |course, category| course.category_id.as_deref() == Some(category),
        breakpoint,
        limits,
    )
}
