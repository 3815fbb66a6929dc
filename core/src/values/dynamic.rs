use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use indexmap::IndexMap;

use super::object::Object;

/// A runtime value.
///
/// `Array` and `Map` payloads are reference counted: cloning a value aliases
/// its storage rather than copying it.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    /// All numbers are doubles; integers are exact up to 2^53.
    Number(f64),
    Str(Arc<str>),
    Array(Arc<Vec<Value>>),
    /// Iterates in insertion order.
    Map(Arc<IndexMap<Value, Value>>),
    Object(Arc<dyn Object>),
}

impl Value {
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::Str(s.into())
    }

    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(Arc::new(items.into_iter().collect()))
    }

    /// Build a map; a repeated key keeps its first position and its last value.
    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        let mut map = IndexMap::new();
        for (key, value) in entries {
            map.insert(key, value);
        }
        Value::Map(Arc::new(map))
    }

    pub fn object(object: impl Object + 'static) -> Self {
        Value::Object(Arc::new(object))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<Value, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Arc<dyn Object>> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Name of the variant, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
            Value::Object(_) => "object",
        }
    }

    /// Whether this value supports named-field lookup.
    pub fn has_fields(&self) -> bool {
        matches!(self, Value::Map(_) | Value::Object(_))
    }

    /// Named-field lookup.
    ///
    /// Maps look the name up as a string key first, then fall back to the
    /// first key whose string form equals the name (so `{1: "a"}` answers
    /// field `"1"`). Values without fields return `None`.
    pub fn field(&self, name: &str) -> Option<Value> {
        match self {
            Value::Map(map) => map
                .get(&Value::string(name))
                .or_else(|| {
                    map.iter()
                        .find(|(key, _)| key.to_string() == name)
                        .map(|(_, value)| value)
                })
                .cloned(),
            Value::Object(object) => object.field(name),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            // Same canonical form as Hash, so NaN keys can be found again
            (Value::Number(a), Value::Number(b)) => canonical_f64(*a) == canonical_f64(*b),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            // Objects use reference equality
            (Value::Object(a), Value::Object(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }
}

impl Eq for Value {}

/// Canonicalize a float for hashing to maintain Hash/Eq invariant.
///
/// - Maps -0.0 to +0.0 (since -0.0 == +0.0)
/// - Maps all NaN representations to a single canonical NaN
fn canonical_f64(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0.0_f64.to_bits()
    } else {
        value.to_bits()
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Nil => {}
            Value::Bool(b) => b.hash(state),
            Value::Number(n) => canonical_f64(*n).hash(state),
            Value::Str(s) => s.hash(state),
            Value::Array(items) => {
                items.len().hash(state);
                for item in items.iter() {
                    item.hash(state);
                }
            }
            // Map equality ignores entry order, so only the length is hashed.
            Value::Map(map) => map.len().hash(state),
            Value::Object(object) => Arc::as_ptr(object).cast::<()>().hash(state),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {:?}", key, value)?;
                }
                write!(f, "}}")
            }
            Value::Object(object) => write!(f, "<Object: {}>", object.describe()),
        }
    }
}

/// The string form of a value, as seen by string concatenation and the
/// text-building builtins.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            // Shortest round-trip form, no trailing ".0" for integral values
            Value::Number(n) => write!(f, "{}", n),
            Value::Str(s) => f.write_str(s),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
            Value::Map(_) => f.write_str("[object Object]"),
            Value::Object(object) => f.write_str(&object.describe()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}
