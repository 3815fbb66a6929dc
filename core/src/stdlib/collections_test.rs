//! Tests for the collection builtins

use pretty_assertions::assert_eq;

use super::*;
use crate::api::{Runtime, RuntimeOptions};

fn numbers(items: &[i64]) -> Value {
    Value::array(items.iter().copied().map(Value::from))
}

#[test]
fn test_range() {
    assert_eq!(range(0, 5, None).unwrap(), numbers(&[0, 1, 2, 3, 4]));
    assert_eq!(range(2, 5, None).unwrap(), numbers(&[2, 3, 4]));
    assert_eq!(range(5, 2, None).unwrap(), numbers(&[]));
}

#[test]
fn test_range_limit() {
    assert_eq!(range(0, 3, Some(3)).unwrap(), numbers(&[0, 1, 2]));
    let err = range(0, 4, Some(3)).unwrap_err();
    assert!(matches!(err, Error::ResourceExceeded(_)));
}

#[test]
fn test_unbounded_range_too_large_to_allocate() {
    let err = range(0, 1 << 62, None).unwrap_err();
    assert!(matches!(err, Error::ResourceExceeded(_)));

    let err = range(i64::MIN, i64::MAX, None).unwrap_err();
    assert!(matches!(err, Error::ResourceExceeded(_)));
}

#[test]
fn test_range_builtin_without_limit_fails_cleanly() {
    let options = RuntimeOptions {
        max_range_len: None,
        ..RuntimeOptions::default()
    };
    let runtime = Runtime::new(options, register_collection_builtins).unwrap();

    let err = runtime.call("_Range", &[Host::from(i64::MAX)]).unwrap_err();
    assert!(matches!(err, Error::ResourceExceeded(_)));

    let small = runtime.call("_Range", &[Host::from(2)]).unwrap();
    assert_eq!(small.into_value(), numbers(&[0, 1]));
}

#[test]
fn test_range_builtin_bounds() {
    let runtime = Runtime::new(RuntimeOptions::default(), register_collection_builtins).unwrap();

    let one = runtime.call("_Range", &[Host::from(3)]).unwrap();
    assert_eq!(one.into_value(), numbers(&[0, 1, 2]));

    let two = runtime
        .call("_Range", &[Host::from(2), Host::from(Value::Number(4.0))])
        .unwrap();
    assert_eq!(two.into_value(), numbers(&[2, 3]));

    let text = runtime.call("_Range", &[Host::from("3")]).unwrap();
    assert_eq!(text.into_value(), numbers(&[]));
}

#[test]
fn test_null() {
    let runtime = Runtime::new(RuntimeOptions::default(), register_collection_builtins).unwrap();
    assert_eq!(runtime.call("null", &[]).unwrap(), Output::Value(Value::Nil));
}

#[test]
fn test_array() {
    let value = array(&[Host::from(1), Host::from("a"), Host::Nil]);
    assert_eq!(
        value,
        Value::array([Value::Number(1.0), Value::from("a"), Value::Nil])
    );
}

#[test]
fn test_map_of_pairs() {
    let value = map_of_pairs(&[
        Host::from("a"),
        Host::from(1),
        Host::from("b"),
    ]);
    assert_eq!(value.field("a"), Some(Value::Number(1.0)));
    assert_eq!(value.field("b"), Some(Value::Nil));
    assert_eq!(value.as_map().map(|map| map.len()), Some(2));
}

#[test]
fn test_extend() {
    let dest = Host::map([("a", 1)]);
    let source = Host::map([("a", 2), ("b", 3)]);
    let merged = extend(false, &dest, &[source]);

    assert_eq!(
        merged,
        Value::map([
            (Value::from("a"), Value::Number(2.0)),
            (Value::from("b"), Value::Number(3.0)),
        ])
    );
}

#[test]
fn test_extend_later_sources_win() {
    let merged = extend(
        true,
        &Host::map([("k", "dest")]),
        &[Host::map([("k", "first")]), Host::map([("k", "second")])],
    );
    assert_eq!(merged.field("k"), Some(Value::from("second")));
}

#[test]
fn test_extend_keeps_destination_order() {
    let merged = extend(
        false,
        &Host::map([("x", 1), ("y", 2)]),
        &[Host::map([("z", 3), ("x", 4)])],
    );
    let keys: Vec<String> = merged
        .as_map()
        .unwrap()
        .keys()
        .map(ToString::to_string)
        .collect();
    assert_eq!(keys, vec!["x", "y", "z"]);
}

#[test]
fn test_extend_ignores_non_maps() {
    let merged = extend(false, &Host::from(5), &[Host::from("x"), Host::map([("a", 1)])]);
    assert_eq!(merged, Value::map([(Value::from("a"), Value::Number(1.0))]));
}

#[test]
fn test_extend_does_not_mutate_converted_destination() {
    let dest = Value::map([(Value::from("a"), Value::Number(1.0))]);
    let merged = extend(
        false,
        &Host::from(dest.clone()),
        &[Host::map([("b", 2)])],
    );
    assert_eq!(dest.as_map().map(|map| map.len()), Some(1));
    assert_eq!(merged.as_map().map(|map| map.len()), Some(2));
}

#[test]
fn test_extend_builtin() {
    let runtime = Runtime::new(RuntimeOptions::default(), register_collection_builtins).unwrap();
    let out = runtime
        .call(
            "extend",
            &[Host::from(false), Host::map([("a", 1)]), Host::map([("a", 2), ("b", 3)])],
        )
        .unwrap();
    assert_eq!(
        out.into_value(),
        Value::map([
            (Value::from("a"), Value::Number(2.0)),
            (Value::from("b"), Value::Number(3.0)),
        ])
    );
}
