//! Tests for the runtime value type

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use pretty_assertions::assert_eq;

use super::{Object, Value};

fn hash_of(value: &Value) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

struct Counter;

impl Object for Counter {
    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "count" => Some(Value::Number(3.0)),
            _ => None,
        }
    }

    fn describe(&self) -> String {
        "Counter".to_string()
    }
}

#[test]
fn test_display() {
    assert_eq!(Value::Nil.to_string(), "");
    assert_eq!(Value::Bool(false).to_string(), "false");
    assert_eq!(Value::Number(3.0).to_string(), "3");
    assert_eq!(Value::Number(0.5).to_string(), "0.5");
    assert_eq!(Value::from("hi").to_string(), "hi");
    assert_eq!(
        Value::array([Value::Number(1.0), Value::from("a"), Value::Nil]).to_string(),
        "1,a,"
    );
    assert_eq!(
        Value::map([(Value::from("a"), Value::Nil)]).to_string(),
        "[object Object]"
    );
    assert_eq!(Value::object(Counter).to_string(), "Counter");
}

#[test]
fn test_debug_quotes_strings() {
    let value = Value::map([(Value::from("k"), Value::array([Value::from("v")]))]);
    assert_eq!(format!("{:?}", value), r#"{"k": ["v"]}"#);
}

#[test]
fn test_map_repeated_key() {
    let value = Value::map([
        (Value::from("a"), Value::Number(1.0)),
        (Value::from("b"), Value::Number(2.0)),
        (Value::from("a"), Value::Number(3.0)),
    ]);
    let map = value.as_map().unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get_index(0), Some((&Value::from("a"), &Value::Number(3.0))));
}

#[test]
fn test_map_equality_ignores_order() {
    let a = Value::map([
        (Value::from("x"), Value::Number(1.0)),
        (Value::from("y"), Value::Number(2.0)),
    ]);
    let b = Value::map([
        (Value::from("y"), Value::Number(2.0)),
        (Value::from("x"), Value::Number(1.0)),
    ]);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn test_zero_hashes_like_negative_zero() {
    assert_eq!(Value::Number(0.0), Value::Number(-0.0));
    assert_eq!(hash_of(&Value::Number(0.0)), hash_of(&Value::Number(-0.0)));
}

#[test]
fn test_nan_keys_are_reachable() {
    assert_eq!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    assert_eq!(hash_of(&Value::Number(f64::NAN)), hash_of(&Value::Number(-f64::NAN)));

    let value = Value::map([
        (Value::Number(f64::NAN), Value::from("a")),
        (Value::Number(f64::NAN), Value::from("b")),
    ]);
    let map = value.as_map().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&Value::Number(f64::NAN)), Some(&Value::from("b")));
}

#[test]
fn test_objects_compare_by_identity() {
    let a = Value::object(Counter);
    let b = Value::object(Counter);
    assert_eq!(a, a.clone());
    assert_ne!(a, b);
}

#[test]
fn test_field_lookup() {
    let map = Value::map([
        (Value::from("name"), Value::from("ada")),
        (Value::Number(1.0), Value::from("one")),
    ]);
    assert_eq!(map.field("name"), Some(Value::from("ada")));
    assert_eq!(map.field("1"), Some(Value::from("one")));
    assert_eq!(map.field("missing"), None);

    assert_eq!(Value::object(Counter).field("count"), Some(Value::Number(3.0)));
    assert_eq!(Value::from("text").field("len"), None);
}

#[test]
fn test_accessors() {
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::Number(2.0).as_number(), Some(2.0));
    assert_eq!(Value::from("s").as_str(), Some("s"));
    assert_eq!(Value::Nil.as_str(), None);
    assert_eq!(
        Value::array([Value::Nil]).as_array(),
        Some([Value::Nil].as_slice())
    );
    assert!(Value::object(Counter).as_object().is_some());
    assert!(Value::Nil.is_nil());
    assert!(Value::map([]).has_fields());
    assert!(!Value::array([]).has_fields());
}

#[test]
fn test_kind_names() {
    assert_eq!(Value::Nil.kind_name(), "nil");
    assert_eq!(Value::from(1i64).kind_name(), "number");
    assert_eq!(Value::object(Counter).kind_name(), "object");
}

#[test]
fn test_clone_aliases_storage() {
    let value = Value::array([Value::Number(1.0)]);
    let copy = value.clone();
    match (&value, &copy) {
        (Value::Array(a), Value::Array(b)) => assert!(std::sync::Arc::ptr_eq(a, b)),
        _ => unreachable!(),
    }
}
