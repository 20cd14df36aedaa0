//! Multi-select listing filters.
//!
//! A filter group pairs a selection with a matcher. Within a group any
//! selected value qualifies; across groups every non-empty group must match.
//! An empty selection places no constraint at all.

use std::collections::BTreeSet;

use campus_core::entities::{CertificationCourse, Course, University};
use serde::{Deserialize, Serialize};

use crate::index::HierarchyIndex;

/// Selected values for one filter group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection(BTreeSet<String>);

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A selection holding just `value`, as seeded from a query string.
    #[must_use]
    pub fn single(value: impl Into<String>) -> Self {
        let mut selection = Self::new();
        selection.insert(value);
        selection
    }

    pub fn insert(&mut self, value: impl Into<String>) {
        self.0.insert(value.into());
    }

    /// Add `value` if absent, remove it if present. Returns whether it is
    /// now selected.
    pub fn toggle(&mut self, value: &str) -> bool {
        if self.0.remove(value) {
            false
        } else {
            self.0.insert(value.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.0.contains(value)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

type Matcher<'a, T> = Box<dyn Fn(&T, &Selection) -> bool + 'a>;

/// One filter group: a selection and how an entity is tested against it.
pub struct FilterGroup<'a, T> {
    selected: &'a Selection,
    matches: Matcher<'a, T>,
}

impl<'a, T> FilterGroup<'a, T> {
    /// Match when the entity's field value is selected.
    pub fn by_field<F>(selected: &'a Selection, field: F) -> Self
    where
        F: Fn(&T) -> Option<&str> + 'a,
    {
        Self {
            selected,
            matches: Box::new(move |item, selection| {
                field(item).is_some_and(|value| selection.contains(value))
            }),
        }
    }

    /// Match with an arbitrary predicate, for memberships that are not a
    /// plain column.
    pub fn by_predicate<F>(selected: &'a Selection, predicate: F) -> Self
    where
        F: Fn(&T, &Selection) -> bool + 'a,
    {
        Self {
            selected,
            matches: Box::new(predicate),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.selected.is_empty()
    }

    fn accepts(&self, item: &T) -> bool {
        !self.is_active() || (self.matches)(item, self.selected)
    }
}

/// Filtered entities in their original order.
#[derive(Debug)]
pub struct FilterOutcome<'t, T> {
    pub items: Vec<&'t T>,
    pub is_empty: bool,
}

pub fn apply_filters<'t, T>(
    items: &'t [T],
    groups: &[FilterGroup<'_, T>],
) -> FilterOutcome<'t, T> {
    let items: Vec<&T> = items
        .iter()
        .filter(|item| groups.iter().all(|group| group.accepts(item)))
        .collect();
    let is_empty = items.is_empty();
    FilterOutcome { items, is_empty }
}

/// College listing: location and stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversityFilters {
    pub locations: Selection,
    pub streams: Selection,
}

impl UniversityFilters {
    pub fn clear(&mut self) {
        self.locations.clear();
        self.streams.clear();
    }
}

pub fn filter_universities<'t>(
    universities: &'t [University],
    filters: &UniversityFilters,
    index: &HierarchyIndex,
) -> FilterOutcome<'t, University> {
    let groups = [
        FilterGroup::<University>::by_field(&filters.locations, |u| Some(u.location.as_str())),
        FilterGroup::<University>::by_predicate(&filters.streams, |u, streams| {
            streams
                .iter()
                .any(|stream| index.university_in_stream(&u.id, stream))
        }),
    ];
    apply_filters(universities, &groups)
}

/// Course listing: stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseFilters {
    pub streams: Selection,
}

impl CourseFilters {
    pub fn clear(&mut self) {
        self.streams.clear();
    }
}

pub fn filter_courses<'t>(
    courses: &'t [Course],
    filters: &CourseFilters,
) -> FilterOutcome<'t, Course> {
    let groups = [FilterGroup::<Course>::by_field(&filters.streams, |c| {
        c.stream_id.as_deref()
    })];
    apply_filters(courses, &groups)
}

/// Certification listing: category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationFilters {
    pub categories: Selection,
}

impl CertificationFilters {
    pub fn clear(&mut self) {
        self.categories.clear();
    }
}

pub fn filter_certifications<'t>(
    courses: &'t [CertificationCourse],
    filters: &CertificationFilters,
) -> FilterOutcome<'t, CertificationCourse> {
    let groups = [FilterGroup::<CertificationCourse>::by_field(
        &filters.categories,
        |c| c.category_id.as_deref(),
    )];
    apply_filters(courses, &groups)
}

/// Distinct university locations in first-appearance order.
#[must_use]
pub fn unique_locations(universities: &[University]) -> Vec<&str> {
    let mut seen = BTreeSet::new();
    universities
        .iter()
        .map(|u| u.location.as_str())
        .filter(|location| seen.insert(*location))
        .collect()
}
