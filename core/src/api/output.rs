//! Results of builtin calls.

use crate::values::{Host, SafeString, Value, convert};

/// What a builtin hands back to the render code.
///
/// Call sites that expect a primitive get one directly (`Bool`, `Int`,
/// `Str`); arithmetic results keep their host numeric kind (`Host`); safe
/// strings carry the output context they may be emitted into unescaped.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Value(Value),
    Host(Host),
    Bool(bool),
    Int(i64),
    Str(String),
    Safe(SafeString),
}

impl Output {
    /// The result as a runtime value. Safe strings become plain strings.
    pub fn into_value(self) -> Value {
        match self {
            Output::Value(value) => value,
            Output::Host(host) => Value::from(host),
            Output::Bool(b) => Value::Bool(b),
            Output::Int(i) => Value::Number(i as f64),
            Output::Str(s) => Value::string(s),
            Output::Safe(safe) => Value::string(safe.into_string()),
        }
    }

    /// The result as a host value, ready to feed into another call.
    pub fn into_host(self) -> Host {
        match self {
            Output::Value(value) => Host::Value(value),
            Output::Host(host) => host,
            Output::Bool(b) => Host::Bool(b),
            Output::Int(i) => Host::Int(i),
            Output::Str(s) => Host::Str(s),
            Output::Safe(safe) => Host::from(safe),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Output::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_safe(&self) -> Option<&SafeString> {
        match self {
            Output::Safe(safe) => Some(safe),
            _ => None,
        }
    }

    /// The text this result renders as.
    pub fn render(&self) -> String {
        match self {
            Output::Value(value) => value.to_string(),
            Output::Host(host) => convert(host).to_string(),
            Output::Bool(b) => b.to_string(),
            Output::Int(i) => i.to_string(),
            Output::Str(s) => s.clone(),
            Output::Safe(safe) => safe.as_str().to_string(),
        }
    }
}

impl From<Value> for Output {
    fn from(value: Value) -> Self {
        Output::Value(value)
    }
}

impl From<SafeString> for Output {
    fn from(safe: SafeString) -> Self {
        Output::Safe(safe)
    }
}
