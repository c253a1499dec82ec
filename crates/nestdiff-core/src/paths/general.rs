use crate::errors::{NestError, Result};
use crate::paths::{leaf_text, Path};
use crate::shape::{type_name, Shape};
use crate::{log_op_end, log_op_error, log_op_start};
use nestdiff_core_types::schema::OP_ENUMERATE_PATHS;
use serde_json::{Map, Value};

/// Enumerate every root-to-leaf path of a nested mapping
///
/// - `{k: "v"}` yields `[k, v]`
/// - `{k: ["v1", "v2"]}` yields `[k, v1]`, `[k, v2]`; elements of any
///   other type become their JSON text (`{k: [{"a": "b"}]}` yields
///   `[k, {"a":"b"}]`)
/// - `{k: {...}}` recurses and prefixes every inner path with `k`
///
/// # Errors
/// * `UnsupportedValueType` - an entry's value is neither a string, a
///   sequence, nor a mapping. No partial result is returned.
pub fn enumerate_paths(mapping: &Map<String, Value>) -> Result<Vec<Path>> {
    log_op_start!(OP_ENUMERATE_PATHS, keys = mapping.len());
    let start = std::time::Instant::now();

    let mut paths = Vec::new();
    let mut prefix = Vec::new();
    match walk(mapping, &mut prefix, &mut paths) {
        Ok(()) => {
            log_op_end!(OP_ENUMERATE_PATHS, started = start, path_count = paths.len());
            Ok(paths)
        }
        Err(e) => {
            log_op_error!(OP_ENUMERATE_PATHS, e.clone(), started = start);
            Err(e)
        }
    }
}

fn walk(mapping: &Map<String, Value>, prefix: &mut Vec<String>, out: &mut Vec<Path>) -> Result<()> {
    for (key, value) in mapping {
        match Shape::of(value) {
            Shape::String(leaf) => out.push(extend(prefix, key, leaf.to_string())),
            Shape::Sequence(items) => {
                out.extend(items.iter().map(|item| extend(prefix, key, leaf_text(item))));
            }
            Shape::Mapping(inner) => {
                prefix.push(key.clone());
                let nested = walk(inner, prefix, out);
                prefix.pop();
                nested?;
            }
            _ => return Err(unsupported(key, value)),
        }
    }
    Ok(())
}

fn extend(prefix: &[String], key: &str, leaf: String) -> Path {
    let mut path = Vec::with_capacity(prefix.len() + 2);
    path.extend_from_slice(prefix);
    path.push(key.to_string());
    path.push(leaf);
    path
}

fn unsupported(key: &str, value: &Value) -> NestError {
    NestError::UnsupportedValueType {
        key: key.to_string(),
        type_name: type_name(value),
        value: value.to_string(),
    }
}
