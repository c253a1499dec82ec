use serde_json::{Map, Value};

/// Unwrap a `json!` object literal into a mapping
#[allow(dead_code)]
pub fn obj(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture is not an object: {}", other),
    }
}

/// Unwrap a `json!` array of object literals into a list of mappings
#[allow(dead_code)]
pub fn objs(value: Value) -> Vec<Map<String, Value>> {
    nestdiff_core::compare::as_mapping_list(&value).expect("fixture is not a list of objects")
}
