//! Row-to-entity parsing helpers and dynamic UPDATE assembly.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing and handle the dual datetime
//! format (`SQLite`'s `datetime('now')` vs Rust's `to_rfc3339()`).

use chrono::{DateTime, Utc};

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read an INTEGER flag column.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_bool(row: &libsql::Row, idx: i32) -> Result<bool, DatabaseError> {
    Ok(row.get::<i64>(idx)? != 0)
}

/// Read a `COUNT(*)` column.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` for a negative count.
pub fn get_count(row: &libsql::Row, idx: i32) -> Result<u64, DatabaseError> {
    let raw = row.get::<i64>(idx)?;
    u64::try_from(raw).map_err(|_| DatabaseError::InvalidState(format!("negative count {raw}")))
}

/// Extract an optional JSON value from a TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string contains invalid JSON.
pub fn parse_optional_json(s: Option<&str>) -> Result<Option<serde_json::Value>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => {
            let val = serde_json::from_str(s)
                .map_err(|e| DatabaseError::Query(format!("Invalid JSON in column: {e}")))?;
            Ok(Some(val))
        }
        _ => Ok(None),
    }
}

/// Serialize an optional JSON document for a TEXT column.
#[must_use]
pub fn json_text(value: Option<&serde_json::Value>) -> Option<String> {
    value.map(serde_json::Value::to_string)
}

/// Trim a required text input, rejecting blank values with `message`.
///
/// # Errors
///
/// Returns `DatabaseError::Validation` when the value is blank.
pub fn required<'a>(value: &'a str, message: &str) -> Result<&'a str, DatabaseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(DatabaseError::validation(message))
    } else {
        Ok(trimmed)
    }
}

/// Collects `column = ?n` assignments for a partial UPDATE.
///
/// Only pushed columns appear in the statement; the row ID is bound last.
#[derive(Debug, Default)]
pub struct UpdateSql {
    sets: Vec<String>,
    params: Vec<libsql::Value>,
}

impl UpdateSql {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, column: &str, value: impl Into<libsql::Value>) {
        self.params.push(value.into());
        self.sets.push(format!("{column} = ?{}", self.params.len()));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Build `UPDATE {table} SET .. WHERE id = ?n` and its parameters.
    #[must_use]
    pub fn finish(mut self, table: &str, id: &str) -> (String, Vec<libsql::Value>) {
        self.params.push(id.into());
        let sql = format!(
            "UPDATE {table} SET {} WHERE id = ?{}",
            self.sets.join(", "),
            self.params.len()
        );
        (sql, self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_datetime_formats() {
        let a = parse_datetime("2026-02-09T14:30:00+00:00").unwrap();
        let b = parse_datetime("2026-02-09 14:30:00").unwrap();
        assert_eq!(a, b);
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn update_sql_numbers_parameters_in_order() {
        let mut update = UpdateSql::new();
        update.set("name", "BTech");
        update.set("duration", Option::<String>::None);
        let (sql, params) = update.finish("courses", "crs-00000001");

        assert_eq!(sql, "UPDATE courses SET name = ?1, duration = ?2 WHERE id = ?3");
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn required_trims_and_rejects_blank() {
        assert_eq!(required("  Pune ", "location").unwrap(), "Pune");
        assert!(matches!(
            required("   ", "Location is required."),
            Err(DatabaseError::Validation(msg)) if msg == "Location is required."
        ));
    }

    #[test]
    fn optional_json_roundtrips() {
        let value = serde_json::json!({"jobs": []});
        let text = json_text(Some(&value)).unwrap();
        assert_eq!(parse_optional_json(Some(&text)).unwrap(), Some(value));
        assert_eq!(parse_optional_json(None).unwrap(), None);
    }
}
