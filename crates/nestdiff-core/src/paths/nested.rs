use crate::paths::{leaf_text, Path};
use crate::shape::{type_name, Shape};
use crate::{log_op_end, log_op_start};
use nestdiff_core_types::schema::OP_ENUMERATE_NESTED_PATHS;
use serde_json::{Map, Value};

/// Deepest mapping level visited; the top-level mapping is level 1
pub const MAX_NESTED_DEPTH: usize = 3;

/// Enumerate root-to-leaf paths with a depth limit and parent-key carry
///
/// Differs from [`super::enumerate_paths`] in three ways:
///
/// - Mappings nested deeper than [`MAX_NESTED_DEPTH`] are not visited.
/// - Inner paths are not prefixed with the full key chain. Only the
///   immediate parent key is carried one level down, and it is prepended to
///   list-valued entries only: under `{"p": {"k": ["v"], "s": "w"}}` the list
///   entry yields `[p, k, v]` while the string entry yields `[s, w]`.
/// - Entry values that are not a string, sequence or mapping are skipped.
///   List elements are all kept, as in the general variant.
///
/// Never fails.
pub fn enumerate_nested_paths(mapping: &Map<String, Value>) -> Vec<Path> {
    log_op_start!(OP_ENUMERATE_NESTED_PATHS, keys = mapping.len());
    let start = std::time::Instant::now();

    let mut paths = Vec::new();
    walk(mapping, None, 1, &mut paths);

    log_op_end!(
        OP_ENUMERATE_NESTED_PATHS,
        started = start,
        path_count = paths.len()
    );
    paths
}

fn walk(mapping: &Map<String, Value>, parent: Option<&str>, depth: usize, out: &mut Vec<Path>) {
    for (key, value) in mapping {
        match Shape::of(value) {
            Shape::String(leaf) => out.push(vec![key.clone(), leaf.to_string()]),
            Shape::Sequence(items) => {
                for item in items {
                    let mut path = Vec::with_capacity(3);
                    path.extend(parent.map(str::to_string));
                    path.push(key.clone());
                    path.push(leaf_text(item));
                    out.push(path);
                }
            }
            Shape::Mapping(inner) if depth < MAX_NESTED_DEPTH => {
                walk(inner, Some(key.as_str()), depth + 1, out)
            }
            _ => tracing::trace!(key = %key, kind = type_name(value), depth, "skipping entry"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("fixture is not an object: {}", other),
        }
    }

    #[test]
    fn test_top_level_entries_have_no_parent() {
        let paths = enumerate_nested_paths(&obj(json!({"a": "b", "c": ["d", "e"]})));
        assert_eq!(paths, vec![vec!["a", "b"], vec!["c", "d"], vec!["c", "e"]]);
    }

    #[test]
    fn test_parent_key_only_prefixes_list_entries() {
        let paths = enumerate_nested_paths(&obj(json!({
            "p": {"k": ["v1", "v2"], "s": "w"}
        })));
        assert_eq!(
            paths,
            vec![vec!["p", "k", "v1"], vec!["p", "k", "v2"], vec!["s", "w"]]
        );
    }

    #[test]
    fn test_only_immediate_parent_is_carried() {
        let paths = enumerate_nested_paths(&obj(json!({
            "a": {"b": {"c": ["d"]}}
        })));
        assert_eq!(paths, vec![vec!["b", "c", "d"]]);
    }

    #[test]
    fn test_depth_limit_stops_descent() {
        let paths = enumerate_nested_paths(&obj(json!({
            "l1": {"l2": {"l3": {"l4": "too deep"}, "leaf": "kept"}}
        })));
        assert_eq!(paths, vec![vec!["leaf", "kept"]]);
    }

    #[test]
    fn test_unsupported_values_are_skipped() {
        let paths = enumerate_nested_paths(&obj(json!({
            "n": 5,
            "f": 1.5,
            "b": true,
            "z": null,
            "mixed": ["x", 1, {"y": "z"}],
            "s": "t"
        })));
        assert_eq!(
            paths,
            vec![
                vec!["mixed", "x"],
                vec!["mixed", "1"],
                vec!["mixed", r#"{"y":"z"}"#],
                vec!["s", "t"],
            ]
        );
    }
}
