//! nestdiff core - utilities over nested JSON-shaped data
//!
//! This crate provides:
//! - Root-to-leaf path enumeration over nested mappings (general and
//!   depth-limited variants)
//! - A recursive structural differ producing human-readable diff records
//! - A coverage comparator for lists of mappings
//! - A request-header augmentor that guarantees a JSON content type
//! - An explicit, thread-safe singleton registry keyed by type
//!
//! All data is modelled as [`serde_json::Value`] with insertion-ordered
//! objects, so traversal order always follows the input document.

pub mod compare;
pub mod diff;
pub mod errors;
pub mod headers;
pub mod logging_facility;
pub mod paths;
pub mod shape;
pub mod singleton;

// Re-export commonly used types
pub use compare::compare_lists_of_equal_length_mappings;
pub use diff::{diff, diff_records, DiffKind, DiffOptions, DiffRecord};
pub use errors::{ExError, ExErrorKind, NestError, Result};
pub use headers::{ensure_json_content_type, with_json_content_type, Headers};
pub use paths::{enumerate_nested_paths, enumerate_paths, Path};
pub use singleton::{Singleton, SingletonRegistry};
