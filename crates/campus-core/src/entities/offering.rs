use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A university offering a course. Pairs are kept unique by the assign path.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct UniversityCourseLink {
    pub university_id: String,
    pub course_id: String,
}
