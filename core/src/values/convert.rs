//! The conversion engine: host values into [`Value`]s.

use std::sync::Arc;

use indexmap::IndexMap;

use super::{Host, Reflect, Value};

/// Convert a host value into a runtime value.
///
/// Total and deterministic:
/// - integers and floats become `Number` (integers widen to `f64`)
/// - sequences become `Array`, converting each element
/// - mappings become `Map`; a repeated key keeps its first position and its
///   last value
/// - objects and already-converted values pass through unchanged
/// - opaque values are read reflectively: an `Array` of their elements when
///   indexable, `Nil` otherwise
pub fn convert(host: &Host) -> Value {
    match host {
        Host::Nil => Value::Nil,
        Host::Bool(b) => Value::Bool(*b),
        Host::Int(i) => Value::Number(*i as f64),
        Host::Float(x) => Value::Number(*x),
        Host::Str(s) => Value::string(s.as_str()),
        Host::Seq(items) => Value::Array(Arc::new(items.iter().map(convert).collect())),
        Host::Map(entries) => {
            let mut map = IndexMap::with_capacity(entries.len());
            for (key, value) in entries {
                map.insert(convert(key), convert(value));
            }
            Value::Map(Arc::new(map))
        }
        Host::Object(object) => Value::Object(Arc::clone(object)),
        Host::Value(value) => value.clone(),
        Host::Opaque(reflect) => convert_reflected(reflect.as_ref()),
    }
}

fn convert_reflected(reflect: &dyn Reflect) -> Value {
    match reflect.element_count() {
        Some(len) => Value::array((0..len).map(|index| {
            reflect
                .element(index)
                .map_or(Value::Nil, |element| convert(&element))
        })),
        None => {
            tracing::trace!("opaque host value is not indexable, converting to nil");
            Value::Nil
        }
    }
}

impl From<&Host> for Value {
    fn from(host: &Host) -> Self {
        convert(host)
    }
}

impl From<Host> for Value {
    fn from(host: Host) -> Self {
        match host {
            Host::Value(value) => value,
            other => convert(&other),
        }
    }
}
