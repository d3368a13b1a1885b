use serde::Serialize;
use serde_json::Value;

use super::ResourceRecordSet;
use crate::error::Result;

/// Accepted spellings of the top-level record-set collection.
const RECORD_SET_KEYS: [&str; 2] = ["ResourceRecordSets", "resourceRecordSets"];

/// Accepted spellings of the truncation marker.
const TRUNCATED_KEYS: [&str; 2] = ["IsTruncated", "isTruncated"];

/// A parsed hosted-zone export
///
/// Only the record-set collection matters; pagination fields other than
/// the truncation marker are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExportDocument {
    /// Record sets in export order
    pub resource_record_sets: Vec<ResourceRecordSet>,

    /// The export says more pages exist
    pub is_truncated: bool,

    /// Indices of entries that were not JSON objects
    pub malformed_entries: Vec<usize>,
}

impl ExportDocument {
    /// Parse a document from JSON text
    ///
    /// Fails only when the text is not well-formed JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }

    /// Build a document from an already-parsed JSON value
    ///
    /// A missing or non-array collection means zero record sets.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let entries = RECORD_SET_KEYS
            .iter()
            .find_map(|key| value.get(key).filter(|v| !v.is_null()))
            .and_then(Value::as_array);

        let mut doc = Self {
            is_truncated: TRUNCATED_KEYS
                .iter()
                .any(|key| value.get(key).and_then(Value::as_bool) == Some(true)),
            ..Self::default()
        };

        for (index, entry) in entries.into_iter().flatten().enumerate() {
            let rrset = if entry.is_object() {
                serde_json::from_value(entry.clone()).ok()
            } else {
                None
            };
            if rrset.is_none() {
                doc.malformed_entries.push(index);
            }
            doc.resource_record_sets.push(rrset.unwrap_or_default());
        }

        doc
    }

    /// Number of record-set entries in the export
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.resource_record_sets.len()
    }

    /// Non-empty record names in export order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resource_record_sets
            .iter()
            .map(ResourceRecordSet::name)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pascal_case_collection() {
        let doc = ExportDocument::from_json_str(
            r#"{"ResourceRecordSets":[{"Name":"example.com.","Type":"A","TTL":300,"ResourceRecords":[{"Value":"1.2.3.4"}]}]}"#,
        )
        .unwrap();
        assert_eq!(doc.entry_count(), 1);
        assert_eq!(doc.names().collect::<Vec<_>>(), ["example.com."]);
        assert!(!doc.is_truncated);
    }

    #[test]
    fn test_parse_camel_case_collection() {
        let doc = ExportDocument::from_json_str(
            r#"{"resourceRecordSets":[{"Name":"a.example.com.","Type":"A"}],"isTruncated":true}"#,
        )
        .unwrap();
        assert_eq!(doc.entry_count(), 1);
        assert!(doc.is_truncated);
    }

    #[test]
    fn test_missing_collection_is_empty() {
        for json in [r#"{}"#, r#"{"ResourceRecordSets":null}"#, r#"{"ResourceRecordSets":"x"}"#, "[]", "null"] {
            let doc = ExportDocument::from_json_str(json).unwrap();
            assert_eq!(doc.entry_count(), 0, "{json}");
        }
    }

    #[test]
    fn test_malformed_json_is_input_error() {
        let err = ExportDocument::from_json_str("{\"ResourceRecordSets\": [").unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_non_object_entries_are_kept_as_blank_record_sets() {
        let doc = ExportDocument::from_json_str(
            r#"{"ResourceRecordSets":["oops",{"Name":"b.example.com.","Type":"A"},7]}"#,
        )
        .unwrap();
        assert_eq!(doc.entry_count(), 3);
        assert_eq!(doc.malformed_entries, [0, 2]);
        assert_eq!(doc.resource_record_sets[0], ResourceRecordSet::default());
        assert_eq!(doc.names().collect::<Vec<_>>(), ["b.example.com."]);
    }
}
