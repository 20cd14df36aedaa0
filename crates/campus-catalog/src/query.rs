//! Initial selections read from a page's query string.
//!
//! Pages read one optional parameter when they first load and use it to
//! pre-select a filter or highlight an entry. Later selection changes are
//! not written back.

use serde::{Deserialize, Serialize};

use crate::filter::{CertificationFilters, CourseFilters, Selection, UniversityFilters};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySeed {
    pub stream: Option<String>,
    pub category: Option<String>,
    pub college: Option<String>,
    pub view: Option<String>,
    pub course: Option<String>,
    pub certification_id: Option<String>,
}

impl QuerySeed {
    /// Parse `stream=..&category=..`, with or without a leading `?`.
    ///
    /// The first non-empty value of each known parameter wins. Unknown
    /// parameters and undecodable values are skipped.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let mut seed = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let spaced = raw.replace('+', " ");
            let value = match urlencoding::decode(&spaced) {
                Ok(value) => value.trim().to_string(),
                Err(error) => {
                    tracing::warn!(key, %error, "skipping undecodable query parameter");
                    continue;
                }
            };
            if value.is_empty() {
                continue;
            }

            let slot = match key {
                "stream" => &mut seed.stream,
                "category" => &mut seed.category,
                "college" => &mut seed.college,
                "view" => &mut seed.view,
                "course" => &mut seed.course,
                "certification_id" => &mut seed.certification_id,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }

        seed
    }

    /// Course and college pre-selected on the apply form, in that order.
    #[must_use]
    pub fn apply_form(&self) -> (Option<&str>, Option<&str>) {
        (self.course.as_deref(), self.college.as_deref())
    }

    #[must_use]
    pub fn university_filters(&self) -> UniversityFilters {
        UniversityFilters {
            streams: seeded(self.stream.as_deref()),
            ..UniversityFilters::default()
        }
    }

    #[must_use]
    pub fn course_filters(&self) -> CourseFilters {
        CourseFilters {
            streams: seeded(self.stream.as_deref()),
        }
    }

    #[must_use]
    pub fn certification_filters(&self) -> CertificationFilters {
        CertificationFilters {
            categories: seeded(self.category.as_deref()),
        }
    }
}

fn seeded(value: Option<&str>) -> Selection {
    value.map_or_else(Selection::new, Selection::single)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_known_parameters() {
        let seed = QuerySeed::parse("?stream=str-1&view=uni-9&utm_source=mail");
        assert_eq!(seed.stream.as_deref(), Some("str-1"));
        assert_eq!(seed.view.as_deref(), Some("uni-9"));
        assert_eq!(seed.category, None);
    }

    #[test]
    fn first_value_wins() {
        let seed = QuerySeed::parse("category=cat-1&category=cat-2");
        assert_eq!(seed.category.as_deref(), Some("cat-1"));
    }

    #[test]
    fn values_are_percent_decoded() {
        let seed = QuerySeed::parse("course=Computer%20Science&college=St+Xavier");
        assert_eq!(seed.course.as_deref(), Some("Computer Science"));
        assert_eq!(seed.college.as_deref(), Some("St Xavier"));
    }

    #[test]
    fn empty_values_are_ignored() {
        let seed = QuerySeed::parse("stream=&stream=str-2&certification_id");
        assert_eq!(seed.stream.as_deref(), Some("str-2"));
        assert_eq!(seed.certification_id, None);
    }

    #[test]
    fn seeds_single_value_selections() {
        let seed = QuerySeed::parse("stream=str-1&category=cat-3");
        assert!(seed.university_filters().streams.contains("str-1"));
        assert!(seed.university_filters().locations.is_empty());
        assert_eq!(seed.course_filters().streams.len(), 1);
        assert!(seed.certification_filters().categories.contains("cat-3"));
    }

    #[test]
    fn apply_form_reads_course_and_college() {
        let seed = QuerySeed::parse("?course=crs-1&college=uni-2");
        assert_eq!(seed.apply_form(), (Some("crs-1"), Some("uni-2")));

        let seed = QuerySeed::parse("college=uni-2");
        assert_eq!(seed.apply_form(), (None, Some("uni-2")));
    }

    #[test]
    fn no_query_seeds_nothing() {
        let seed = QuerySeed::parse("");
        assert_eq!(seed, QuerySeed::default());
        assert!(seed.course_filters().streams.is_empty());
    }
}
