//! JSON encoding support.
//!
//! Both [`Value`] and [`Host`] implement `serde::Serialize`; host integers
//! are written exactly rather than through a double. Map keys must be
//! scalars (strings, numbers or booleans), and objects are written through
//! their [`snapshot`](super::Object::snapshot). Anything else fails with a
//! serialization error.

use serde::ser::{Error as _, Serialize, SerializeMap, SerializeSeq, Serializer};

use super::{Host, Value, convert};

/// Largest magnitude at which every integer is exactly representable.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

fn serialize_number<S: Serializer>(n: f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !n.is_finite() {
        return Err(non_finite(n));
    }
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(n as i64)
    } else {
        serializer.serialize_f64(n)
    }
}

/// JSON has no spelling for NaN or the infinities.
fn non_finite<E: serde::ser::Error>(n: f64) -> E {
    E::custom(format!("non-finite number {n} cannot be encoded as JSON"))
}

/// The text a map key is written as.
fn key_text(key: &Value) -> Result<String, &'static str> {
    match key {
        Value::Str(s) => Ok(s.to_string()),
        Value::Number(_) | Value::Bool(_) => Ok(key.to_string()),
        Value::Nil => Err("nil"),
        Value::Array(_) => Err("array"),
        Value::Map(_) => Err("map"),
        Value::Object(_) => Err("object"),
    }
}

fn serialize_key<M: SerializeMap>(map: &mut M, key: &Value) -> Result<(), M::Error> {
    match key_text(key) {
        Ok(text) => map.serialize_key(&text),
        Err(kind) => Err(M::Error::custom(format!(
            "map key must be a string, number or boolean, got {kind}"
        ))),
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Nil => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serialize_number(*n, serializer),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries.iter() {
                    serialize_key(&mut map, key)?;
                    map.serialize_value(value)?;
                }
                map.end()
            }
            Value::Object(object) => match object.snapshot() {
                Some(snapshot) => snapshot.serialize(serializer),
                None => Err(S::Error::custom(format!(
                    "object `{}` cannot be serialized",
                    object.describe()
                ))),
            },
        }
    }
}

impl Serialize for Host {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Host::Nil => serializer.serialize_unit(),
            Host::Bool(b) => serializer.serialize_bool(*b),
            Host::Int(i) => serializer.serialize_i64(*i),
            Host::Float(x) if !x.is_finite() => Err(non_finite(*x)),
            Host::Float(x) => serializer.serialize_f64(*x),
            Host::Str(s) => serializer.serialize_str(s),
            Host::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Host::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    serialize_key(&mut map, &convert(key))?;
                    map.serialize_value(value)?;
                }
                map.end()
            }
            Host::Value(value) => value.serialize(serializer),
            Host::Object(_) | Host::Opaque(_) => convert(self).serialize(serializer),
        }
    }
}
