//! Structured course documents: syllabus and job outcomes.
//!
//! Both are stored as free-form JSON supplied by administrators. Writes only
//! check well-formedness; reads extract the expected shape and fall back to a
//! "coming soon" placeholder when the document is absent, empty, or shaped
//! differently.
//!
//! ```text
//! syllabus:  {"semesters": [{"semester": 1, "subjects": ["Maths", ...]}, ...]}
//! jobs_info: {"jobs": [{"title": "Engineer", "avg_salary": "6 LPA"}, ...]}
//! ```

use schemars::JsonSchema;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::errors::CoreError;

/// Message returned when administrator-supplied JSON does not parse.
pub const INVALID_DOCUMENT_JSON: &str = "Invalid JSON format for Syllabus or Jobs Info.";

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SyllabusSemester {
    pub semester: u32,
    pub subjects: Vec<String>,
}

/// Average salary as an administrator typed it: `"6 LPA"` or `600000`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum Salary {
    Text(String),
    Amount(Number),
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Amount(amount) => write!(f, "{amount}"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct JobOutcome {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_salary: Option<Salary>,
}

/// A detail-page tab: either entries to show or the placeholder state.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Section<T> {
    Available { entries: Vec<T> },
    ComingSoon,
}

impl<T> Section<T> {
    #[must_use]
    pub fn entries(&self) -> &[T] {
        match self {
            Self::Available { entries } => entries,
            Self::ComingSoon => &[],
        }
    }

    #[must_use]
    pub const fn is_coming_soon(&self) -> bool {
        matches!(self, Self::ComingSoon)
    }
}

/// Entries are read one at a time; an entry of the wrong shape is skipped
/// without hiding the others.
fn extract<T: DeserializeOwned>(document: Option<&Value>, key: &str) -> Section<T> {
    let entries: Vec<T> = document
        .and_then(|doc| doc.get(key))
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
                .collect()
        })
        .unwrap_or_default();

    if entries.is_empty() {
        Section::ComingSoon
    } else {
        Section::Available { entries }
    }
}

/// Read the syllabus tab from a stored document.
#[must_use]
pub fn syllabus_section(document: Option<&Value>) -> Section<SyllabusSemester> {
    extract(document, "semesters")
}

/// Read the jobs tab from a stored document.
#[must_use]
pub fn jobs_section(document: Option<&Value>) -> Section<JobOutcome> {
    extract(document, "jobs")
}

/// Parse administrator-supplied document text.
///
/// Blank input means "no document". Anything else must be well-formed JSON;
/// its shape is not checked.
///
/// # Errors
///
/// Returns `CoreError::Validation` when the text is not valid JSON.
pub fn parse_document_text(text: Option<&str>) -> Result<Option<Value>, CoreError> {
    match text.map(str::trim) {
        Some(raw) if !raw.is_empty() => serde_json::from_str(raw)
            .map(Some)
            .map_err(|_| CoreError::validation(INVALID_DOCUMENT_JSON)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn well_shaped_syllabus_is_available() {
        let doc = json!({"semesters": [{"semester": 1, "subjects": ["Maths", "Physics"]}]});
        let section = syllabus_section(Some(&doc));
        assert_eq!(
            section.entries(),
            &[SyllabusSemester {
                semester: 1,
                subjects: vec!["Maths".into(), "Physics".into()],
            }]
        );
    }

    #[test]
    fn missing_document_is_coming_soon() {
        assert!(syllabus_section(None).is_coming_soon());
        assert!(jobs_section(None).is_coming_soon());
    }

    #[test]
    fn wrong_shape_is_coming_soon() {
        let doc = json!({"semesters": "first year only"});
        assert!(syllabus_section(Some(&doc)).is_coming_soon());

        let doc = json!([{"title": "Engineer", "avg_salary": "6 LPA"}]);
        assert!(jobs_section(Some(&doc)).is_coming_soon());

        let doc = json!({"jobs": [{"name": "Engineer"}]});
        assert!(jobs_section(Some(&doc)).is_coming_soon());
    }

    #[test]
    fn empty_list_is_coming_soon() {
        let doc = json!({"jobs": []});
        assert!(jobs_section(Some(&doc)).is_coming_soon());
    }

    #[test]
    fn jobs_section_reads_entries() {
        let doc = json!({"jobs": [{"title": "Engineer", "avg_salary": "6 LPA"}]});
        let section = jobs_section(Some(&doc));
        assert_eq!(section.entries().len(), 1);
        assert_eq!(
            section.entries()[0].avg_salary,
            Some(Salary::Text("6 LPA".into()))
        );
    }

    #[test]
    fn numeric_and_text_salaries_both_render() {
        let doc = json!({"jobs": [
            {"title": "Engineer", "avg_salary": 600_000},
            {"title": "Analyst", "avg_salary": "5 LPA"},
        ]});
        let section = jobs_section(Some(&doc));

        let salaries: Vec<String> = section
            .entries()
            .iter()
            .filter_map(|job| job.avg_salary.as_ref().map(ToString::to_string))
            .collect();
        assert_eq!(salaries, vec!["600000", "5 LPA"]);
    }

    #[test]
    fn malformed_entry_does_not_hide_the_rest() {
        let doc = json!({"jobs": [
            {"name": "no title"},
            {"title": "Nurse"},
            "Doctor",
        ]});
        let section = jobs_section(Some(&doc));
        assert_eq!(section.entries().len(), 1);
        assert_eq!(section.entries()[0].title, "Nurse");
        assert_eq!(section.entries()[0].avg_salary, None);

        let doc = json!({"semesters": [
            {"semester": 1, "subjects": ["Maths"]},
            {"semester": "two"},
        ]});
        assert_eq!(syllabus_section(Some(&doc)).entries().len(), 1);
    }

    #[test]
    fn document_text_blank_is_none() {
        assert_eq!(parse_document_text(None).unwrap(), None);
        assert_eq!(parse_document_text(Some("   ")).unwrap(), None);
    }

    #[test]
    fn document_text_must_be_json() {
        let err = parse_document_text(Some("{semesters: 1")).unwrap_err();
        assert_eq!(err.to_string(), format!("Validation error: {INVALID_DOCUMENT_JSON}"));
    }

    #[test]
    fn document_text_shape_is_not_checked() {
        let parsed = parse_document_text(Some("[1, 2, 3]")).unwrap();
        assert_eq!(parsed, Some(json!([1, 2, 3])));
    }
}
