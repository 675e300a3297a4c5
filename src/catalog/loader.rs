//! Catalog loading: JSON files and the embedded demo catalog.
//!
//! The on-disk format is a JSON array of records:
//!
//! ```json
//! [
//!   { "id": "deep_sea_id", "title": "Deep Sea Creatures", "tags": ["#ocean"] }
//! ]
//! ```
//!
//! `tags` may be omitted. Ids must be unique and neither id nor title may
//! be empty.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::{Video, VideoCatalog};

/// Demo catalog compiled into the binary, used when no file is given.
const DEFAULT_CATALOG_JSON: &str = include_str!("default_catalog.json");

/// Errors raised while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate video id in catalog: {id}")]
    DuplicateId { id: String },

    #[error("catalog record {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },
}

/// One record of the JSON catalog format.
#[derive(Debug, Deserialize)]
struct VideoRecord {
    id: String,
    title: String,
    #[serde(default)]
    tags: Vec<String>,
}

/// Loads and validates a catalog from a JSON file.
pub fn load_file(path: &Path) -> Result<VideoCatalog, CatalogError> {
    let raw = fs::read_to_string(path)?;
    let catalog = from_json(&raw)?;
    debug!("loaded {} videos from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Parses and validates a catalog from a JSON string.
pub fn from_json(raw: &str) -> Result<VideoCatalog, CatalogError> {
    let records: Vec<VideoRecord> = serde_json::from_str(raw)?;

    let mut seen = HashSet::new();
    for (index, record) in records.iter().enumerate() {
        if record.id.is_empty() {
            return Err(CatalogError::EmptyField { index, field: "id" });
        }
        if record.title.is_empty() {
            return Err(CatalogError::EmptyField { index, field: "title" });
        }
        if !seen.insert(record.id.as_str()) {
            return Err(CatalogError::DuplicateId {
                id: record.id.clone(),
            });
        }
    }

    let videos = records
        .into_iter()
        .map(|r| Video::new(r.id, r.title, r.tags))
        .collect();
    Ok(VideoCatalog::new(videos))
}

/// The built-in demo catalog.
pub fn default_catalog() -> VideoCatalog {
    from_json(DEFAULT_CATALOG_JSON).expect("embedded demo catalog is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_records_with_and_without_tags() {
        let catalog = from_json(
            r##"[
                { "id": "a_id", "title": "Alpha", "tags": ["#one", "#two"] },
                { "id": "b_id", "title": "Beta" }
            ]"##,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("a_id").unwrap().tags(), ["#one", "#two"]);
        assert!(catalog.get("b_id").unwrap().tags().is_empty());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = from_json(
            r#"[
                { "id": "dup_id", "title": "First" },
                { "id": "dup_id", "title": "Second" }
            ]"#,
        )
        .unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateId { id } if id == "dup_id"));
    }

    #[test]
    fn rejects_empty_id_and_title() {
        let err = from_json(r#"[ { "id": "", "title": "Nameless" } ]"#).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyField { index: 0, field: "id" }));

        let err = from_json(r#"[ { "id": "x_id", "title": "" } ]"#).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyField { index: 0, field: "title" }));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(from_json("not json"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn loads_catalog_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"[ {{ "id": "disk_id", "title": "From Disk", "tags": ["#io"] }} ]"##
        )
        .unwrap();

        let catalog = load_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("disk_id").unwrap().title(), "From Disk");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_file(Path::new("/nonexistent/videos.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn default_catalog_is_valid_and_nonempty() {
        let catalog = default_catalog();
        assert!(!catalog.is_empty());
    }
}
