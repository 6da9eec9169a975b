//! Loading an export and locating its timeline entries.

use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

/// Container keys used by the known export formats, in priority order.
const ENTRY_CONTAINER_KEYS: &[&str] = &[
    "semanticSegments",
    "timelineObjects",
    "segments",
    "timelineObjectsV2",
];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads and parses an export file fully into memory.
pub fn load_document(path: &Path) -> Result<Value, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_document(&content)
}

/// Parses an export already held in memory.
pub fn parse_document(content: &str) -> Result<Value, LoadError> {
    Ok(serde_json::from_str(content)?)
}

/// Finds the list of timeline entries inside an arbitrarily shaped document.
///
/// Known container keys are probed first. Failing that, the first array value
/// of the top-level object (in document order) is used. A top-level array is
/// returned as-is. Anything else yields no entries.
pub fn locate_entries(document: &Value) -> &[Value] {
    match document {
        Value::Array(entries) => entries.as_slice(),
        Value::Object(map) => ENTRY_CONTAINER_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_array))
            .or_else(|| map.values().find_map(Value::as_array))
            .map_or(&[][..], Vec::as_slice),
        _ => &[],
    }
}
