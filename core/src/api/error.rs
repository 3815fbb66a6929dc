//! Public error types for the runtime API.
//!
//! Operators never fail; they return sentinels. The only error a builtin
//! body raises is [`Error::Serialization`] from `json` (plus
//! [`Error::ResourceExceeded`] when a range limit is configured). The
//! remaining variants come from the registry boundary itself.

use thiserror::Error;

use super::registry::Arity;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value could not be encoded as JSON.
    #[error("Serialization failed: {message}")]
    Serialization { message: String },

    /// The render code called a name the builtin table does not define.
    #[error("Unknown function '{0}'")]
    UnknownFunction(String),

    /// The render code called a builtin with the wrong number of arguments.
    #[error("Function '{name}' expects {expected} argument(s), got {got}")]
    Arity {
        name: String,
        expected: Arity,
        got: usize,
    },

    /// The same name was registered more than once.
    #[error("Duplicate binding for {}", format_names(.0))]
    DuplicateBinding(Vec<String>),

    /// A configured resource limit was exceeded.
    #[error("Resource limit exceeded: {0}")]
    ResourceExceeded(String),
}

fn format_names(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("'{}'", name))
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization {
            message: err.to_string(),
        }
    }
}
