use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{
    CertificationCategory, CertificationCourse, Course, Stream, University, UniversityCourseLink,
};

/// Every table the navigation menus and listing pages derive from.
///
/// Loaded in one concurrent batch by `campus-db`. A table whose fetch
/// failed is simply empty here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CatalogSnapshot {
    pub streams: Vec<Stream>,
    pub courses: Vec<Course>,
    pub universities: Vec<University>,
    pub offerings: Vec<UniversityCourseLink>,
    pub categories: Vec<CertificationCategory>,
    pub certifications: Vec<CertificationCourse>,
}

impl CatalogSnapshot {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
            && self.courses.is_empty()
            && self.universities.is_empty()
            && self.offerings.is_empty()
            && self.categories.is_empty()
            && self.certifications.is_empty()
    }
}
