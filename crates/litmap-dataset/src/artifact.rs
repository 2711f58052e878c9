//! Versioned on-disk schema of the publication table.
//!
//! This file is the wire contract between the offline data-preparation
//! pipeline (collection, embedding, projection) and the dashboard. The
//! dashboard only ever reads it.

use serde::{Deserialize, Serialize};

use crate::document::DocumentRecord;

/// Current artifact schema version. Bump whenever a column is added,
/// removed, or changes meaning or units.
pub const SCHEMA_VERSION: u32 = 1;

/// Wire form of the dataset artifact.
///
/// Invariants the producing pipeline must uphold:
/// - `year` is always a 4-digit token (string comparison of years relies
///   on the fixed width);
/// - `level` partitions `name` values into disjoint vocabularies.
#[derive(Debug, Serialize, Deserialize)]
pub struct DatasetArtifact {
    /// Must equal [`SCHEMA_VERSION`]; anything else is a fatal load error.
    pub schema_version: u32,

    /// One row per (document, field-of-study) pair.
    pub documents: Vec<DocumentRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_round_trips_through_json() {
        let json = r#"{
            "schema_version": 1,
            "documents": [{
                "id": "W123",
                "title": "On the spread of false news",
                "year": "2018",
                "source": "https://doi.org/10.1000/example",
                "name": "computer science",
                "level": 0,
                "citations": 42,
                "component_1": 5.2,
                "component_2": 9.1
            }]
        }"#;

        let artifact: DatasetArtifact = serde_json::from_str(json).unwrap();
        assert_eq!(artifact.schema_version, SCHEMA_VERSION);
        assert_eq!(artifact.documents.len(), 1);
        assert_eq!(artifact.documents[0].year, "2018");
        assert_eq!(artifact.documents[0].level, 0);
    }

    #[test]
    fn missing_column_is_a_parse_error() {
        // No `citations` field.
        let json = r#"{
            "schema_version": 1,
            "documents": [{
                "id": "W123",
                "title": "t",
                "year": "2018",
                "source": "s",
                "name": "n",
                "level": 0,
                "component_1": 0.0,
                "component_2": 0.0
            }]
        }"#;

        assert!(serde_json::from_str::<DatasetArtifact>(json).is_err());
    }
}
