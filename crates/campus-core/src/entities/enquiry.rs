use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EnquiryKind;
use crate::errors::CoreError;

/// What an enquiry is about.
///
/// The two shapes are exclusive. The storage layer writes the columns of the
/// other shape as NULL, so a row can never carry both.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EnquiryTarget {
    /// Interest in a degree course, a college, or both.
    Course {
        course_id: Option<String>,
        college_id: Option<String>,
    },
    Certification { certification_course_id: String },
}

impl EnquiryTarget {
    #[must_use]
    pub const fn kind(&self) -> EnquiryKind {
        match self {
            Self::Course { .. } => EnquiryKind::Course,
            Self::Certification { .. } => EnquiryKind::Certification,
        }
    }

    #[must_use]
    pub fn course_id(&self) -> Option<&str> {
        match self {
            Self::Course { course_id, .. } => course_id.as_deref(),
            Self::Certification { .. } => None,
        }
    }

    #[must_use]
    pub fn college_id(&self) -> Option<&str> {
        match self {
            Self::Course { college_id, .. } => college_id.as_deref(),
            Self::Certification { .. } => None,
        }
    }

    #[must_use]
    pub fn certification_course_id(&self) -> Option<&str> {
        match self {
            Self::Course { .. } => None,
            Self::Certification {
                certification_course_id,
            } => Some(certification_course_id),
        }
    }
}

/// A stored admission enquiry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Enquiry {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub current_class: Option<String>,
    pub target: EnquiryTarget,
    /// Set once an administrator has phoned the student.
    pub called: bool,
    pub remark: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for submitting an enquiry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewEnquiry {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub current_class: Option<String>,
    pub target: EnquiryTarget,
}

impl NewEnquiry {
    /// Name and phone are mandatory.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first missing field.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("name is required"));
        }
        if self.phone.trim().is_empty() {
            return Err(CoreError::validation("phone is required"));
        }
        Ok(())
    }
}
