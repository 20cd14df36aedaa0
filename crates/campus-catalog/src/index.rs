//! Lookup structures built from flat catalog rows.
//!
//! Rebuilt from scratch every time the tables are fetched.

use std::collections::{HashMap, HashSet};

use campus_core::entities::{CatalogRow, Course, UniversityCourseLink};

/// Label for a certification course that no longer exists.
pub const UNKNOWN_COURSE: &str = "Unknown Course";

/// Label for a missing course or college reference.
pub const NOT_AVAILABLE: &str = "N/A";

/// Parent ID to the set of child IDs.
pub type ParentChildIndex = HashMap<String, HashSet<String>>;

/// Display names keyed by ID, borrowed from the rows they were built from.
#[derive(Debug, Clone, Default)]
pub struct IdNameMap<'a> {
    names: HashMap<&'a str, &'a str>,
}

impl<'a> IdNameMap<'a> {
    #[must_use]
    pub fn label(&self, id: Option<&str>) -> Option<&'a str> {
        id.and_then(|id| self.names.get(id).copied())
    }

    /// Resolve `id`, or return `fallback` when it is absent or unknown.
    #[must_use]
    pub fn label_or(&self, id: Option<&str>, fallback: &'a str) -> &'a str {
        self.label(id).unwrap_or(fallback)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[must_use]
pub fn build_id_name_map<T: CatalogRow>(rows: &[T]) -> IdNameMap<'_> {
    IdNameMap {
        names: rows.iter().map(|row| (row.id(), row.name())).collect(),
    }
}

/// Group children under their parent key.
///
/// Children whose key is `None` are left out entirely; there is no bucket
/// for unassigned rows.
#[must_use]
pub fn build_parent_child_index<T, F>(children: &[T], parent_of: F) -> ParentChildIndex
where
    T: CatalogRow,
    F: Fn(&T) -> Option<&str>,
{
    let mut index = ParentChildIndex::new();
    for child in children {
        if let Some(parent) = parent_of(child) {
            index
                .entry(parent.to_string())
                .or_default()
                .insert(child.id().to_string());
        }
    }
    index
}

/// Both directions of the university/course many-to-many table.
#[derive(Debug, Clone, Default)]
pub struct AssociationIndex {
    universities_by_course: HashMap<String, HashSet<String>>,
    courses_by_university: HashMap<String, HashSet<String>>,
}

impl AssociationIndex {
    #[must_use]
    pub fn universities_offering(&self, course_id: &str) -> Option<&HashSet<String>> {
        self.universities_by_course.get(course_id)
    }

    #[must_use]
    pub fn courses_of(&self, university_id: &str) -> Option<&HashSet<String>> {
        self.courses_by_university.get(university_id)
    }

    #[must_use]
    pub fn offers(&self, university_id: &str, course_id: &str) -> bool {
        self.courses_of(university_id)
            .is_some_and(|courses| courses.contains(course_id))
    }
}

#[must_use]
pub fn build_association_index(links: &[UniversityCourseLink]) -> AssociationIndex {
    let mut index = AssociationIndex::default();
    for link in links {
        index
            .universities_by_course
            .entry(link.course_id.clone())
            .or_default()
            .insert(link.university_id.clone());
        index
            .courses_by_university
            .entry(link.university_id.clone())
            .or_default()
            .insert(link.course_id.clone());
    }
    index
}

/// Stream membership for courses and, through their offerings, universities.
///
/// A university has no stream of its own. It belongs to every stream of any
/// course it offers; courses without a stream contribute nothing.
#[derive(Debug, Clone, Default)]
pub struct HierarchyIndex {
    courses_by_stream: ParentChildIndex,
    stream_of_course: HashMap<String, String>,
    offerings: AssociationIndex,
}

impl HierarchyIndex {
    #[must_use]
    pub fn new(courses: &[Course], links: &[UniversityCourseLink]) -> Self {
        let stream_of_course = courses
            .iter()
            .filter_map(|course| {
                course
                    .stream_id
                    .as_ref()
                    .map(|stream| (course.id.clone(), stream.clone()))
            })
            .collect();

        Self {
            courses_by_stream: build_parent_child_index(courses, |c| c.stream_id.as_deref()),
            stream_of_course,
            offerings: build_association_index(links),
        }
    }

    #[must_use]
    pub const fn courses_by_stream(&self) -> &ParentChildIndex {
        &self.courses_by_stream
    }

    #[must_use]
    pub const fn offerings(&self) -> &AssociationIndex {
        &self.offerings
    }

    #[must_use]
    pub fn course_in_stream(&self, course_id: &str, stream_id: &str) -> bool {
        self.stream_of_course
            .get(course_id)
            .is_some_and(|stream| stream == stream_id)
    }

    /// Does the university offer at least one course in `stream_id`?
    #[must_use]
    pub fn university_in_stream(&self, university_id: &str, stream_id: &str) -> bool {
        self.offerings.courses_of(university_id).is_some_and(|courses| {
            courses
                .iter()
                .any(|course| self.course_in_stream(course, stream_id))
        })
    }

    /// Every university offering a course in `stream_id`.
    #[must_use]
    pub fn universities_in_stream(&self, stream_id: &str) -> HashSet<&str> {
        self.courses_by_stream
            .get(stream_id)
            .into_iter()
            .flatten()
            .filter_map(|course| self.offerings.universities_offering(course))
            .flatten()
            .map(String::as_str)
            .collect()
    }

    /// Streams a university belongs to, sorted.
    #[must_use]
    pub fn streams_of_university(&self, university_id: &str) -> Vec<&str> {
        let mut streams: Vec<&str> = self
            .offerings
            .courses_of(university_id)
            .into_iter()
            .flatten()
            .filter_map(|course| self.stream_of_course.get(course))
            .map(String::as_str)
            .collect();
        streams.sort_unstable();
        streams.dedup();
        streams
    }
}

#[cfg(test)]
mod tests {
    use campus_core::entities::{Stream, UniversityCourseLink};
    use pretty_assertions::assert_eq;

    use super::*;

    fn course(id: &str, stream: Option<&str>) -> Course {
        Course {
            id: id.into(),
            name: id.to_uppercase(),
            stream_id: stream.map(Into::into),
            description: None,
            duration: None,
            syllabus: None,
            jobs_info: None,
        }
    }

    fn link(university: &str, course: &str) -> UniversityCourseLink {
        UniversityCourseLink {
            university_id: university.into(),
            course_id: course.into(),
        }
    }

    #[test]
    fn null_parent_is_excluded_from_every_group() {
        let courses = vec![course("c1", None), course("c2", Some("s1"))];
        let index = build_parent_child_index(&courses, |c| c.stream_id.as_deref());

        assert_eq!(index.len(), 1);
        assert_eq!(index["s1"], HashSet::from(["c2".to_string()]));
    }

    #[test]
    fn label_lookup_falls_back() {
        let streams = vec![Stream {
            id: "s1".into(),
            name: "Engineering".into(),
        }];
        let names = build_id_name_map(&streams);

        assert_eq!(names.label(Some("s1")), Some("Engineering"));
        assert_eq!(names.label_or(Some("s9"), NOT_AVAILABLE), "N/A");
        assert_eq!(names.label_or(None, UNKNOWN_COURSE), "Unknown Course");
    }

    #[test]
    fn association_index_is_bidirectional() {
        let index =
            build_association_index(&[link("u1", "c1"), link("u1", "c2"), link("u2", "c1")]);

        assert_eq!(index.universities_offering("c1").map(HashSet::len), Some(2));
        assert_eq!(index.courses_of("u1").map(HashSet::len), Some(2));
        assert!(index.offers("u2", "c1"));
        assert!(!index.offers("u2", "c2"));
        assert!(index.courses_of("u3").is_none());
    }

    #[test]
    fn university_inherits_streams_through_offered_courses() {
        let courses = vec![
            course("c1", Some("s1")),
            course("c2", None),
            course("c3", Some("s2")),
        ];
        let links = vec![link("u3", "c1"), link("u3", "c2"), link("u4", "c3")];
        let index = HierarchyIndex::new(&courses, &links);

        assert!(index.university_in_stream("u3", "s1"));
        assert!(!index.university_in_stream("u3", "s2"));
        assert_eq!(index.streams_of_university("u3"), vec!["s1"]);
        assert_eq!(index.universities_in_stream("s2"), HashSet::from(["u4"]));
        assert!(index.universities_in_stream("s9").is_empty());
    }

    #[test]
    fn link_to_missing_course_is_ignored() {
        let index = HierarchyIndex::new(&[], &[link("u1", "gone")]);
        assert!(index.streams_of_university("u1").is_empty());
    }
}
