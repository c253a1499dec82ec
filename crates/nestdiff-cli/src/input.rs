//! Loading JSON documents from disk

use nestdiff_core::shape::type_name;
use nestdiff_core::NestError;
use serde_json::{Map, Value};
use std::path::Path;

/// Read and parse a JSON document
pub fn load_json(path: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    let value: Value = serde_json::from_str(&text)
        .map_err(|e| format!("{} is not valid JSON: {}", path.display(), e))?;
    Ok(value)
}

/// Read a JSON document whose root must be an object
pub fn load_mapping(path: &Path) -> Result<Map<String, Value>, Box<dyn std::error::Error>> {
    match load_json(path)? {
        Value::Object(map) => Ok(map),
        other => Err(NestError::UnexpectedShape {
            what: "mapping",
            type_name: type_name(&other),
        }
        .into()),
    }
}
