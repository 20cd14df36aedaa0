//! Response types returned as JSON by `campus` commands.
//!
//! Detail views join an entity with the rows it references; list rows carry
//! labels already resolved against the catalog.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::documents::{JobOutcome, Section, SyllabusSemester};
use crate::entities::{CertificationCourse, Course, Enquiry, University};

/// Response from `campus course get`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CourseDetail {
    pub course: Course,
    pub stream_name: Option<String>,
    pub syllabus: Section<SyllabusSemester>,
    pub jobs: Section<JobOutcome>,
    /// Universities offering the course, ordered by name.
    pub universities: Vec<University>,
}

/// Response from `campus university get`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UniversityDetail {
    pub university: University,
    pub courses: Vec<Course>,
}

/// Response from `campus certification get`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CertificationDetail {
    pub course: CertificationCourse,
    pub category_name: Option<String>,
}

/// An enquiry with its referenced names resolved for the admin list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EnquiryRow {
    pub enquiry: Enquiry,
    /// Course or certification course name.
    pub course_label: String,
    /// College name; absent for certification enquiries.
    pub college_label: Option<String>,
}

/// Response from `campus offering assign`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AssignOutcome {
    pub course_id: String,
    pub assigned: Vec<String>,
    /// Universities that already offered the course.
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u64,
}

/// Response from `campus overview`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OverviewStats {
    pub total_enquiries: u64,
    pub enquiries_today: u64,
    pub calls_today: u64,
    pub registered_users: u64,
    /// Enquiries per day for the last seven days, oldest first.
    pub last_seven_days: Vec<DailyCount>,
}

/// Response from the `export` subcommands.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExportResponse {
    pub path: String,
    pub sheet: String,
    pub rows: usize,
}
