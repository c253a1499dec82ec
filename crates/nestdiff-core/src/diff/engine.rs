//! Recursive structural diff.
//!
//! The core entry point is [`diff_records`]. Values are classified with
//! [`Shape`] and matched against a fixed, ordered list of shape pairs; the
//! first matching pair decides how the two values are compared:
//!
//! 1. mapping / mapping
//! 2. sequence / sequence
//! 3. string / string
//! 4. float / float (tolerance [`FLOAT_TOLERANCE`])
//! 5. integer / integer
//! 6. boolean / boolean, null / null
//! 7. anything else: a single type mismatch, no recursion
//!
//! An integer is never compared numerically against a float: `3` vs `3.0`
//! is a type mismatch.

use crate::diff::model::{DiffKind, DiffOptions, DiffRecord, Side};
use crate::shape::{type_name, Shape};
use crate::{log_op_end, log_op_start};
use nestdiff_core_types::schema::OP_DIFF;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Largest absolute difference at which two floats still count as equal
pub const FLOAT_TOLERANCE: f64 = 1e-5;

/// Compare two values and describe every discrepancy.
///
/// An empty result means the values are equal under `options`. Mismatches
/// are data, never errors.
pub fn diff_records(first: &Value, second: &Value, options: &DiffOptions) -> Vec<DiffRecord> {
    log_op_start!(
        OP_DIFF,
        symmetric_match = options.symmetric_match,
        strict_match = options.strict_match
    );
    let start = std::time::Instant::now();

    let mut differ = Differ {
        options,
        records: Vec::new(),
    };
    differ.compare(first, second, "");

    log_op_end!(OP_DIFF, started = start, diff_count = differ.records.len());
    differ.records
}

/// Compare two values and return one human-readable message per discrepancy.
pub fn diff(first: &Value, second: &Value, options: &DiffOptions) -> Vec<String> {
    diff_records(first, second, options)
        .iter()
        .map(ToString::to_string)
        .collect()
}

struct Differ<'o> {
    options: &'o DiffOptions,
    records: Vec<DiffRecord>,
}

impl Differ<'_> {
    fn push(&mut self, path: String, kind: DiffKind) {
        self.records.push(DiffRecord::new(path, kind));
    }

    fn compare(&mut self, first: &Value, second: &Value, path: &str) {
        match (Shape::of(first), Shape::of(second)) {
            (Shape::Mapping(a), Shape::Mapping(b)) => self.compare_mappings(a, b, path),
            (Shape::Sequence(a), Shape::Sequence(b)) => self.compare_sequences(a, b, path),
            (Shape::String(a), Shape::String(b)) => {
                if a != b {
                    self.push(
                        path.to_string(),
                        DiffKind::StringMismatch {
                            first: a.to_string(),
                            second: b.to_string(),
                        },
                    );
                }
            }
            (Shape::Float(a), Shape::Float(b)) => {
                if (a - b).abs() > FLOAT_TOLERANCE {
                    self.push(
                        path.to_string(),
                        DiffKind::FloatMismatch {
                            first: a,
                            second: b,
                        },
                    );
                }
            }
            (Shape::Integer(a), Shape::Integer(b)) => {
                if a != b {
                    self.push(
                        path.to_string(),
                        DiffKind::IntegerMismatch {
                            first: a.to_string(),
                            second: b.to_string(),
                        },
                    );
                }
            }
            (Shape::Other(a), Shape::Other(b))
                if std::mem::discriminant(a) == std::mem::discriminant(b) =>
            {
                if a != b {
                    self.push(
                        path.to_string(),
                        DiffKind::ValueMismatch {
                            first: a.to_string(),
                            second: b.to_string(),
                        },
                    );
                }
            }
            _ => self.push(
                path.to_string(),
                DiffKind::TypeMismatch {
                    first: type_name(first).to_string(),
                    second: type_name(second).to_string(),
                },
            ),
        }
    }

    fn compare_mappings(&mut self, a: &Map<String, Value>, b: &Map<String, Value>, path: &str) {
        for key in a.keys().filter(|key| !b.contains_key(*key)) {
            self.push(
                format!("{}.{}", path, key),
                DiffKind::MissingKey {
                    missing_in: Side::Second,
                },
            );
        }
        if self.options.symmetric_match {
            for key in b.keys().filter(|key| !a.contains_key(*key)) {
                self.push(
                    format!("{}.{}", path, key),
                    DiffKind::MissingKey {
                        missing_in: Side::First,
                    },
                );
            }
        }
        for (key, value_a) in a {
            if let Some(value_b) = b.get(key) {
                self.compare(value_a, value_b, &format!("{}.{}", path, key));
            }
        }
    }

    fn compare_sequences(&mut self, a: &[Value], b: &[Value], path: &str) {
        if !self.options.strict_match && all_scalar(a) && all_scalar(b) {
            for (missing_in, elements) in [
                (Side::Second, only_in(a, b)),
                (Side::First, only_in(b, a)),
            ] {
                if !elements.is_empty() {
                    self.push(
                        path.to_string(),
                        DiffKind::MissingElements {
                            missing_in,
                            elements,
                        },
                    );
                }
            }
            return;
        }

        for (index, value_a) in a.iter().enumerate() {
            let element_path = format!("{}[{}]", path, index);
            match b.get(index) {
                Some(value_b) => self.compare(value_a, value_b, &element_path),
                None => self.push(
                    element_path,
                    DiffKind::MissingIndex {
                        missing_in: Side::Second,
                    },
                ),
            }
        }
        for index in a.len()..b.len() {
            self.push(
                format!("{}[{}]", path, index),
                DiffKind::MissingIndex {
                    missing_in: Side::First,
                },
            );
        }
    }
}

fn all_scalar(items: &[Value]) -> bool {
    items.iter().all(|item| Shape::of(item).is_scalar())
}

/// Elements of `from` absent in `other`, deduplicated, in order of first
/// appearance. Identity is the canonical JSON text, so `1`, `1.0` and `"1"`
/// are three distinct elements. This is deliberately not numeric set
/// equality: `[1]` against `[1.0]` reports one element on each side, in
/// line with integer and float never comparing equal elsewhere in the
/// differ.
fn only_in(from: &[Value], other: &[Value]) -> Vec<String> {
    let other: HashSet<String> = other.iter().map(Value::to_string).collect();
    let mut seen = HashSet::new();
    from.iter()
        .filter(|item| {
            let canonical = item.to_string();
            !other.contains(&canonical) && seen.insert(canonical)
        })
        .map(|item| match item {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect()
}
