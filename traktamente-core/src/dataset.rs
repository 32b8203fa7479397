//! Dataset loading
//!
//! The dataset is a flat JSON array of objects. It is parsed and validated
//! once; after that the directory never touches it again.

use crate::directory::AllowanceDirectory;
use crate::error::{DirectoryError, Result};
use crate::record::AllowanceRecord;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info, warn};

/// Dataset compiled into the binary
pub const BUNDLED_DATASET: &str = include_str!("../data/traktamente.json");

impl AllowanceDirectory {
    /// Load the bundled dataset
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_DATASET)
    }

    /// Load a dataset file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading allowance dataset");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parse a dataset from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let directory = Self::new(parse_records(value)?);

        if directory.is_empty() {
            warn!("Allowance dataset is empty; every listing will be not found");
        }
        let years: Vec<String> = directory.years().iter().map(|y| y.to_string()).collect();
        info!(
            records = directory.len(),
            years = ?years,
            "Loaded allowance dataset"
        );

        Ok(directory)
    }
}

fn parse_records(value: Value) -> Result<Vec<AllowanceRecord>> {
    let Value::Array(items) = value else {
        return Err(DirectoryError::InvalidDataset(
            "top level must be an array of records".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                return Err(DirectoryError::InvalidDataset(format!(
                    "record {} is not an object",
                    index
                )));
            }
            serde_json::from_value(item).map_err(|e| {
                DirectoryError::InvalidDataset(format!("record {}: {}", index, e))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ListQuery;

    #[test]
    fn test_bundled_dataset_loads() {
        let dir = AllowanceDirectory::bundled().unwrap();
        assert!(!dir.is_empty());
        assert!(dir.find_by_code("PF").is_ok());
        assert!(dir.list(&ListQuery::all().year("2024")).is_ok());
    }

    #[test]
    fn test_bundled_records_serialize_verbatim() {
        let dir = AllowanceDirectory::bundled().unwrap();
        let raw: Vec<Value> = serde_json::from_str(BUNDLED_DATASET).unwrap();
        assert_eq!(raw.len(), dir.len());

        for (record, original) in dir.records().iter().zip(&raw) {
            assert_eq!(
                serde_json::to_string(record).unwrap(),
                serde_json::to_string(original).unwrap()
            );
        }
    }

    #[test]
    fn test_top_level_object_rejected() {
        let err = AllowanceDirectory::from_json_str(r#"{"country or territory": "USA"}"#)
            .unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidDataset(_)));
    }

    #[test]
    fn test_non_object_record_rejected() {
        let err = AllowanceDirectory::from_json_str(r#"[{"code": "US"}, 7]"#).unwrap_err();
        match err {
            DirectoryError::InvalidDataset(msg) => assert!(msg.contains("record 1")),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_wrong_field_type_rejected() {
        let err = AllowanceDirectory::from_json_str(
            r#"[{"country or territory": ["USA"], "code": "US", "year": "2024"}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidDataset(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = AllowanceDirectory::from_json_str("[{").unwrap_err();
        assert!(matches!(err, DirectoryError::Json(_)));
    }

    #[test]
    fn test_empty_array_loads() {
        let dir = AllowanceDirectory::from_json_str("[]").unwrap();
        assert!(dir.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AllowanceDirectory::from_path("/nonexistent/traktamente.json").unwrap_err();
        assert!(matches!(err, DirectoryError::Io(_)));
    }
}
