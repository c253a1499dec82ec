//! Property tests for the differ and the path enumerator.

use nestdiff_core::diff::{diff, diff_records, DiffKind, DiffOptions};
use nestdiff_core::paths::enumerate_paths;
use proptest::prelude::*;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-1.0e6f64..1.0e6).prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-e]{1,3}", inner), 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

fn arb_options() -> impl Strategy<Value = DiffOptions> {
    (any::<bool>(), any::<bool>()).prop_map(|(symmetric_match, strict_match)| DiffOptions {
        symmetric_match,
        strict_match,
    })
}

/// Mappings whose leaves are only strings or lists of strings
fn arb_path_mapping() -> impl Strategy<Value = Map<String, Value>> {
    let leaf = prop_oneof![
        "[a-z]{1,4}".prop_map(Value::String),
        prop::collection::vec("[a-z]{1,4}".prop_map(Value::String), 0..4).prop_map(Value::Array),
    ];
    let tree = leaf.prop_recursive(3, 24, 4, |inner| {
        prop::collection::vec(("[a-d]{1,2}", inner), 0..4)
            .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>()))
    });
    prop::collection::vec(("[a-d]{1,2}", tree), 0..4)
        .prop_map(|entries| entries.into_iter().collect::<Map<_, _>>())
}

fn missing_key_paths(first: &Value, second: &Value) -> BTreeSet<String> {
    diff_records(first, second, &DiffOptions::default())
        .into_iter()
        .filter(|r| matches!(r.kind, DiffKind::MissingKey { .. }))
        .map(|r| r.path)
        .collect()
}

proptest! {
    #[test]
    fn prop_value_equals_itself(value in arb_value(), options in arb_options()) {
        prop_assert!(diff(&value, &value, &options).is_empty());
    }

    #[test]
    fn prop_diff_is_idempotent(a in arb_value(), b in arb_value(), options in arb_options()) {
        prop_assert_eq!(diff(&a, &b, &options), diff(&a, &b, &options));
    }

    #[test]
    fn prop_symmetric_missing_keys_do_not_depend_on_order(a in arb_value(), b in arb_value()) {
        prop_assert_eq!(missing_key_paths(&a, &b), missing_key_paths(&b, &a));
    }

    #[test]
    fn prop_asymmetric_reports_subset_of_symmetric(a in arb_value(), b in arb_value()) {
        let symmetric = diff(&a, &b, &DiffOptions::default());
        let asymmetric = diff(&a, &b, &DiffOptions::default().with_symmetric_match(false));
        prop_assert!(asymmetric.iter().all(|m| symmetric.contains(m)));
    }

    #[test]
    fn prop_enumeration_is_idempotent_and_ends_in_leaves(mapping in arb_path_mapping()) {
        let first = enumerate_paths(&mapping).unwrap();
        let second = enumerate_paths(&mapping).unwrap();
        prop_assert_eq!(&first, &second);
        for path in &first {
            prop_assert!(path.len() >= 2);
        }
    }
}
