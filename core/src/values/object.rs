//! Capabilities for host values the runtime cannot see into directly.

use super::{Host, Value};

/// Named-field lookup over an opaque host value.
///
/// Values of this kind pass through conversion unchanged and are resolved by
/// `tryindex` using the string form of the key.
pub trait Object: Send + Sync {
    /// Look up a field by name. `None` means the field does not exist.
    fn field(&self, name: &str) -> Option<Value>;

    /// String form used when the object is stringified.
    fn describe(&self) -> String {
        "[object Object]".to_string()
    }

    /// A plain-data copy of the object, used for JSON encoding.
    ///
    /// Objects without a snapshot cannot be serialized.
    fn snapshot(&self) -> Option<Value> {
        None
    }
}

/// Reflective element access for host kinds the conversion engine does not
/// recognize.
pub trait Reflect: Send + Sync {
    /// Number of elements, or `None` when the value is not indexable.
    fn element_count(&self) -> Option<usize>;

    /// The element at `index`, if any.
    fn element(&self, index: usize) -> Option<Host>;
}
