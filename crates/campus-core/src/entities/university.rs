use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A partner college or university.
///
/// `image_url` and `logo_url` point at externally hosted files.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct University {
    pub id: String,
    pub name: String,
    pub location: String,
    pub image_url: Option<String>,
    pub logo_url: Option<String>,
    pub package: Option<String>,
    pub accreditation: Option<String>,
    pub description: Option<String>,
    pub about: Option<String>,
    pub website: Option<String>,
}
