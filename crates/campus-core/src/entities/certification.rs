use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Grouping for certification courses, the counterpart of a stream.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CertificationCategory {
    pub id: String,
    pub name: String,
}

/// A short certification program.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CertificationCourse {
    pub id: String,
    pub name: String,
    pub overview: Option<String>,
    pub duration: Option<String>,
    pub category_id: Option<String>,
}
