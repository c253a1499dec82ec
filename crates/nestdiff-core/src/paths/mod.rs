//! Root-to-leaf path enumeration over nested mappings.
//!
//! Two variants are provided:
//!
//! - [`enumerate_paths`]: unbounded depth, every path carries the full key
//!   chain, unsupported values fail with a TypeCondition error.
//! - [`enumerate_nested_paths`]: at most [`nested::MAX_NESTED_DEPTH`] mapping
//!   levels, carries only the immediate parent key (and only for list-valued
//!   entries), unsupported values are skipped.
//!
//! Both preserve the mapping's insertion order and list order. Every
//! element of a list-valued entry yields one path, whatever its type;
//! non-string elements end the path as compact JSON text.

pub mod general;
pub mod nested;

use serde_json::Value;

pub use general::enumerate_paths;
pub use nested::{enumerate_nested_paths, MAX_NESTED_DEPTH};

/// One root-to-leaf traversal: keys followed by the leaf value
pub type Path = Vec<String>;

/// Text form of a sequence element at the end of a path. Strings are kept
/// as-is, anything else (mappings, numbers, booleans, null) becomes its
/// compact JSON text.
pub(crate) fn leaf_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
