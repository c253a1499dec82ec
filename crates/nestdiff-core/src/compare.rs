use crate::errors::{NestError, Result};
use crate::{log_op_end, log_op_error, log_op_start};
use nestdiff_core_types::schema::OP_COMPARE_MAPPING_LISTS;
use serde_json::{Map, Value};

/// Check that every mapping in `first` occurs somewhere in `second`
///
/// This is a coverage check, not a bijection: each element of `first` only
/// needs *some* equal element in `second`, so `[x, x]` is covered by
/// `[x, y]`. Order is ignored.
///
/// # Errors
/// * `LengthMismatch` - the lists differ in length; checked before any
///   comparison work.
pub fn compare_lists_of_equal_length_mappings(
    first: &[Map<String, Value>],
    second: &[Map<String, Value>],
) -> Result<bool> {
    log_op_start!(OP_COMPARE_MAPPING_LISTS, len = first.len());
    let start = std::time::Instant::now();

    if first.len() != second.len() {
        let err = NestError::LengthMismatch {
            first_len: first.len(),
            second_len: second.len(),
        };
        log_op_error!(OP_COMPARE_MAPPING_LISTS, err.clone(), started = start);
        return Err(err);
    }

    let covered = first.iter().all(|mapping| second.contains(mapping));

    log_op_end!(OP_COMPARE_MAPPING_LISTS, started = start, covered = covered);
    Ok(covered)
}

/// Collect every element of a JSON array as an owned mapping
///
/// # Errors
/// * `UnexpectedShape` - `value` is not an array, or one of its elements is not
///   an object
pub fn as_mapping_list(value: &Value) -> Result<Vec<Map<String, Value>>> {
    let items = value.as_array().ok_or(NestError::UnexpectedShape {
        what: "sequence of mappings",
        type_name: crate::shape::type_name(value),
    })?;
    items
        .iter()
        .map(|item| {
            item.as_object().cloned().ok_or(NestError::UnexpectedShape {
                what: "mapping",
                type_name: crate::shape::type_name(item),
            })
        })
        .collect()
}
