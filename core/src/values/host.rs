//! Host values: native data handed to the runtime by generated render code.
//!
//! Every kind the runtime accepts is listed here explicitly. Anything else
//! enters as [`Host::Opaque`] and is only reachable through [`Reflect`].

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use super::dynamic::Value;
use super::object::{Object, Reflect};
use super::safe::SafeString;

#[derive(Clone, Default)]
pub enum Host {
    #[default]
    Nil,
    Bool(bool),
    /// Every signed and unsigned integer width.
    Int(i64),
    /// Every float width.
    Float(f64),
    Str(String),
    Seq(Vec<Host>),
    /// A mapping, in the host's iteration order.
    Map(Vec<(Host, Host)>),
    Object(Arc<dyn Object>),
    /// A value that has already been converted.
    Value(Value),
    Opaque(Arc<dyn Reflect>),
}

impl Host {
    pub fn object(object: impl Object + 'static) -> Self {
        Host::Object(Arc::new(object))
    }

    pub fn opaque(reflect: impl Reflect + 'static) -> Self {
        Host::Opaque(Arc::new(reflect))
    }

    pub fn map<K: Into<Host>, V: Into<Host>>(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        Host::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Host::Nil | Host::Value(Value::Nil))
    }

    /// Name of the host kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Host::Nil => "nil",
            Host::Bool(_) => "bool",
            Host::Int(_) => "int",
            Host::Float(_) => "float",
            Host::Str(_) => "string",
            Host::Seq(_) => "sequence",
            Host::Map(_) => "mapping",
            Host::Object(_) => "object",
            Host::Value(value) => value.kind_name(),
            Host::Opaque(_) => "opaque",
        }
    }
}

impl PartialEq for Host {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Host::Nil, Host::Nil) => true,
            (Host::Bool(a), Host::Bool(b)) => a == b,
            (Host::Int(a), Host::Int(b)) => a == b,
            (Host::Float(a), Host::Float(b)) => a == b,
            (Host::Str(a), Host::Str(b)) => a == b,
            (Host::Seq(a), Host::Seq(b)) => a == b,
            (Host::Map(a), Host::Map(b)) => a == b,
            (Host::Object(a), Host::Object(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            (Host::Value(a), Host::Value(b)) => a == b,
            (Host::Opaque(a), Host::Opaque(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Host::Nil => write!(f, "Nil"),
            Host::Bool(b) => write!(f, "Bool({})", b),
            Host::Int(i) => write!(f, "Int({})", i),
            Host::Float(x) => write!(f, "Float({})", x),
            Host::Str(s) => write!(f, "Str({:?})", s),
            Host::Seq(items) => f.debug_tuple("Seq").field(items).finish(),
            Host::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Host::Object(object) => write!(f, "Object({})", object.describe()),
            Host::Value(value) => write!(f, "Value({:?})", value),
            Host::Opaque(reflect) => match reflect.element_count() {
                Some(len) => write!(f, "Opaque(len = {})", len),
                None => write!(f, "Opaque"),
            },
        }
    }
}

impl From<bool> for Host {
    fn from(b: bool) -> Self {
        Host::Bool(b)
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Host {
                fn from(n: $ty) -> Self {
                    Host::Int(n as i64)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Host {
                /// Values above `i64::MAX` become floats.
                fn from(n: $ty) -> Self {
                    match i64::try_from(n) {
                        Ok(n) => Host::Int(n),
                        Err(_) => Host::Float(n as f64),
                    }
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Host {
    fn from(x: f32) -> Self {
        Host::Float(x as f64)
    }
}

impl From<f64> for Host {
    fn from(x: f64) -> Self {
        Host::Float(x)
    }
}

impl From<&str> for Host {
    fn from(s: &str) -> Self {
        Host::Str(s.to_string())
    }
}

impl From<String> for Host {
    fn from(s: String) -> Self {
        Host::Str(s)
    }
}

/// Safe strings are plain text to the operators.
impl From<SafeString> for Host {
    fn from(s: SafeString) -> Self {
        Host::Str(s.into_string())
    }
}

impl From<Value> for Host {
    fn from(value: Value) -> Self {
        Host::Value(value)
    }
}

impl From<Arc<dyn Object>> for Host {
    fn from(object: Arc<dyn Object>) -> Self {
        Host::Object(object)
    }
}

impl<T: Into<Host>> From<Option<T>> for Host {
    fn from(value: Option<T>) -> Self {
        value.map_or(Host::Nil, Into::into)
    }
}

impl<T: Into<Host>> From<Vec<T>> for Host {
    fn from(items: Vec<T>) -> Self {
        Host::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Host>> From<&[T]> for Host {
    fn from(items: &[T]) -> Self {
        Host::Seq(items.iter().cloned().map(Into::into).collect())
    }
}

impl<K: Into<Host>, V: Into<Host>, S> From<HashMap<K, V, S>> for Host {
    fn from(map: HashMap<K, V, S>) -> Self {
        Host::map(map)
    }
}

impl<K: Into<Host>, V: Into<Host>> From<BTreeMap<K, V>> for Host {
    fn from(map: BTreeMap<K, V>) -> Self {
        Host::map(map)
    }
}

impl<K: Into<Host>, V: Into<Host>, S> From<IndexMap<K, V, S>> for Host {
    fn from(map: IndexMap<K, V, S>) -> Self {
        Host::map(map)
    }
}

/// JSON integers stay integers; everything else maps onto the matching kind.
impl From<serde_json::Value> for Host {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match json {
            Json::Null => Host::Nil,
            Json::Bool(b) => Host::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Host::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Host::from(u)
                } else {
                    Host::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::String(s) => Host::Str(s),
            Json::Array(items) => Host::from(items),
            Json::Object(map) => Host::map(map),
        }
    }
}
