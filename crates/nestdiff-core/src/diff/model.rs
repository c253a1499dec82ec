//! Diff options and output types.
//!
//! Records are plain data: callers can render them with `Display`, or
//! serialize them for machine consumption.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Match mode for a diff run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Also report keys present in the second mapping but not the first
    pub symmetric_match: bool,
    /// Compare sequences positionally; when false, all-scalar sequences are
    /// compared as sets
    pub strict_match: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            symmetric_match: true,
            strict_match: true,
        }
    }
}

impl DiffOptions {
    pub fn with_symmetric_match(mut self, symmetric_match: bool) -> Self {
        self.symmetric_match = symmetric_match;
        self
    }

    pub fn with_strict_match(mut self, strict_match: bool) -> Self {
        self.strict_match = strict_match;
        self
    }
}

/// Which operand something is missing from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    First,
    Second,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => f.write_str("1st"),
            Side::Second => f.write_str("2nd"),
        }
    }
}

/// Nature of a single discrepancy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffKind {
    /// Mapping key present on one side only
    MissingKey { missing_in: Side },
    /// Loose sequence comparison: elements present on one side only
    MissingElements { missing_in: Side, elements: Vec<String> },
    /// Strict sequence comparison: index present on one side only
    MissingIndex { missing_in: Side },
    StringMismatch { first: String, second: String },
    FloatMismatch { first: f64, second: f64 },
    IntegerMismatch { first: String, second: String },
    /// Booleans, nulls
    ValueMismatch { first: String, second: String },
    TypeMismatch { first: String, second: String },
}

/// One discrepancy and its location
///
/// `path` is the key/index chain from the comparison root in `.key` /
/// `[index]` notation; the root itself is the empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffRecord {
    pub path: String,
    #[serde(flatten)]
    pub kind: DiffKind,
}

impl DiffRecord {
    pub fn new(path: impl Into<String>, kind: DiffKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

impl fmt::Display for DiffRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() {
            "<root>"
        } else {
            self.path.as_str()
        };
        match &self.kind {
            DiffKind::MissingKey { missing_in } => {
                write!(f, "{}: key not found in {}", path, missing_in)
            }
            DiffKind::MissingElements {
                missing_in,
                elements,
            } => write!(
                f,
                "{}: elements not found in {}: {}",
                path,
                missing_in,
                elements.join(", ")
            ),
            DiffKind::MissingIndex { missing_in } => {
                write!(f, "{}: element not found in {}", path, missing_in)
            }
            DiffKind::StringMismatch { first, second } => {
                write!(f, "{}: string mismatch: '{}' != '{}'", path, first, second)
            }
            DiffKind::FloatMismatch { first, second } => {
                write!(f, "{}: float mismatch: {:.2} != {:.2}", path, first, second)
            }
            DiffKind::IntegerMismatch { first, second } => {
                write!(f, "{}: integer mismatch: {} != {}", path, first, second)
            }
            DiffKind::ValueMismatch { first, second } => {
                write!(f, "{}: value mismatch: {} != {}", path, first, second)
            }
            DiffKind::TypeMismatch { first, second } => {
                write!(f, "{}: different type: {} != {}", path, first, second)
            }
        }
    }
}
