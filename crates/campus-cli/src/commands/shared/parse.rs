use campus_core::documents::parse_document_text;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse a `snake_case` enum value using serde deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    serde_json::from_value(Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Optional text flag on an update: absent leaves the field alone, an
/// empty string clears it.
#[must_use]
pub fn clearable(raw: Option<&str>) -> Option<Option<String>> {
    raw.map(|value| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

/// Document flag on an update, with the same absent/empty convention.
pub fn clearable_document(raw: Option<&str>) -> anyhow::Result<Option<Option<Value>>> {
    raw.map(|text| parse_document_text(Some(text)))
        .transpose()
        .map_err(anyhow::Error::from)
}

pub fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid date '{raw}' (expected YYYY-MM-DD): {error}"))
}

#[cfg(test)]
mod tests {
    use campus_core::enums::{Breakpoint, EnquiryKind, Role};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_snake_case_enum() {
        let kind: EnquiryKind = parse_enum("certification", "kind").expect("kind should parse");
        assert_eq!(kind, EnquiryKind::Certification);
    }

    #[test]
    fn parses_digit_breakpoint_and_case() {
        let bp: Breakpoint = parse_enum("2XL", "breakpoint").expect("breakpoint should parse");
        assert_eq!(bp, Breakpoint::Xxl);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<Role>("moderator", "role").expect_err("should fail");
        assert!(err.to_string().contains("invalid role 'moderator'"));
    }

    #[test]
    fn clearable_distinguishes_absent_and_empty() {
        assert_eq!(clearable(None), None);
        assert_eq!(clearable(Some("  ")), Some(None));
        assert_eq!(clearable(Some(" 4 years ")), Some(Some("4 years".into())));
    }

    #[test]
    fn clearable_document_rejects_bad_json() {
        assert_eq!(clearable_document(None).unwrap(), None);
        assert_eq!(clearable_document(Some("")).unwrap(), Some(None));
        assert_eq!(
            clearable_document(Some(r#"{"jobs": []}"#)).unwrap(),
            Some(Some(json!({"jobs": []})))
        );
        let err = clearable_document(Some("{jobs")).unwrap_err();
        assert!(err.to_string().contains("Invalid JSON format"));
    }

    #[test]
    fn parses_iso_date() {
        assert_eq!(
            parse_date("2026-03-10").unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
        );
        assert!(parse_date("10/03/2026").is_err());
    }
}
