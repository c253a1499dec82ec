//! Structural diff engine.
//!
//! Compares two arbitrarily nested values and produces an ordered list of
//! discrepancy records.
//!
//! ## Entry points
//!
//! ```
//! use nestdiff_core::diff::{diff, DiffOptions};
//! use serde_json::json;
//!
//! let messages = diff(&json!({"a": 1}), &json!({"a": 2}), &DiffOptions::default());
//! assert_eq!(messages, vec![".a: integer mismatch: 1 != 2"]);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: records follow the first operand's key and index
//!   order; identical inputs always produce identical output.
//! - **No failure mode**: every mismatch, including a missing index or an
//!   unexpected type, is reported as a record.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::{diff, diff_records, FLOAT_TOLERANCE};
pub use human_summary::render_human_summary;
pub use model::{DiffKind, DiffOptions, DiffRecord, Side};
