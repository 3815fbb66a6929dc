//! Index and attribute resolution.

use super::Operand;
use crate::values::{Host, Value, convert};

/// Integer form of an index key: host integers and integral numbers.
fn integer_key(key: &Host) -> Option<i64> {
    match Operand::of(key) {
        Operand::Int(i) => Some(i),
        Operand::Float(x) if x.is_finite() && x.fract() == 0.0 => Some(x as i64),
        _ => None,
    }
}

fn element<T>(items: &[T], index: i64) -> Option<&T> {
    usize::try_from(index).ok().and_then(|i| items.get(i))
}

/// `receiver[key]`, first match wins:
///
/// 1. an `Array` value with an integer key: the element, or `Nil` when out
///    of range
/// 2. a receiver with named fields (maps and objects): the field named by the
///    string form of `key`
/// 3. reflection: host sequences and indexable opaque values with an integer
///    key
///
/// Anything else is `Nil`.
pub fn tryindex(receiver: &Host, key: &Host) -> Value {
    if let Host::Value(Value::Array(items)) = receiver {
        if let Some(index) = integer_key(key) {
            return element(items, index).cloned().unwrap_or_default();
        }
    }

    if let Some(fields) = field_receiver(receiver) {
        let name = convert(key).to_string();
        return fields.field(&name).unwrap_or_default();
    }

    reflect_index(receiver, key)
}

/// The field-capable form of `receiver`, if it has one.
fn field_receiver(receiver: &Host) -> Option<Value> {
    match receiver {
        Host::Object(_) | Host::Map(_) => Some(convert(receiver)),
        Host::Value(value) if value.has_fields() => Some(value.clone()),
        _ => None,
    }
}

fn reflect_index(receiver: &Host, key: &Host) -> Value {
    let Some(index) = integer_key(key) else {
        tracing::trace!(key = key.kind_name(), "index key is not an integer");
        return Value::Nil;
    };

    match receiver {
        Host::Seq(items) => element(items, index).map(convert).unwrap_or_default(),
        Host::Opaque(reflect) => {
            let len = reflect.element_count().unwrap_or(0);
            match usize::try_from(index) {
                Ok(i) if i < len => reflect.element(i).map(|e| convert(&e)).unwrap_or_default(),
                _ => Value::Nil,
            }
        }
        _ => {
            tracing::trace!(receiver = receiver.kind_name(), "receiver is not indexable");
            Value::Nil
        }
    }
}
