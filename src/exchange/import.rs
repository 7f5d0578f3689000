//! Progress import parsing.
//!
//! Accepts any JSON document with a `courses` array whose entries carry an
//! `id`, which includes documents produced by the export command.

use serde::Deserialize;

use crate::error::{MallaError, Result};
use crate::gate::CompletedSet;

#[derive(Debug, Deserialize)]
struct ImportDocument {
    courses: Vec<serde_json::Value>,
}

/// Parse an import payload into a replacement completed set.
///
/// Entries that are not objects, or whose `id` is missing, empty, or not a
/// string, are skipped.
///
/// # Errors
///
/// Returns `ImportParseError` for malformed JSON or a missing or non-array
/// `courses` field.
pub fn parse_import(payload: &str) -> Result<CompletedSet> {
    let document: ImportDocument =
        serde_json::from_str(payload).map_err(|e| MallaError::ImportParseError {
            message: e.to_string(),
        })?;

    let mut skipped = 0usize;
    let set: CompletedSet = document
        .courses
        .iter()
        .filter_map(|entry| {
            let id = entry
                .get("id")
                .and_then(|v| v.as_str())
                .filter(|id| !id.is_empty());
            if id.is_none() {
                skipped += 1;
            }
            id
        })
        .collect();

    if skipped > 0 {
        tracing::debug!("Skipped {} import entries without an id", skipped);
    }

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_course_ids() {
        let set = parse_import(r#"{"courses":[{"id":"A"}]}"#).unwrap();
        assert_eq!(set, CompletedSet::from_iter(["A"]));
    }

    #[test]
    fn accepts_export_documents() {
        let payload = r#"{
            "date": "2026-03-09",
            "totalCourses": 3,
            "completedCount": 2,
            "completionPercent": 67,
            "courses": [
                {"id": "mat1", "name": "Cálculo I", "credits": 6, "semester": "S1"},
                {"id": "fis1", "name": "fis1", "credits": null, "semester": null}
            ]
        }"#;
        let set = parse_import(payload).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("fis1"));
    }

    #[test]
    fn skips_entries_without_usable_id() {
        let payload = r#"{"courses":[{"id":""},{"name":"x"},{"id":7},"mat1",{"id":"ok"}]}"#;
        let set = parse_import(payload).unwrap();
        assert_eq!(set, CompletedSet::from_iter(["ok"]));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = parse_import("{\"courses\": [").unwrap_err();
        assert!(matches!(err, MallaError::ImportParseError { .. }));
    }

    #[test]
    fn missing_courses_array_is_an_error() {
        assert!(matches!(
            parse_import(r#"{"date":"x"}"#),
            Err(MallaError::ImportParseError { .. })
        ));
        assert!(matches!(
            parse_import(r#"{"courses":"mat1"}"#),
            Err(MallaError::ImportParseError { .. })
        ));
    }
}
