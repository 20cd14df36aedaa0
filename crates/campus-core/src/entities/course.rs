use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A degree course, optionally placed in a stream.
///
/// `syllabus` and `jobs_info` are free-form documents; see
/// [`crate::documents`] for how they are read.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub stream_id: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub syllabus: Option<serde_json::Value>,
    pub jobs_info: Option<serde_json::Value>,
}
