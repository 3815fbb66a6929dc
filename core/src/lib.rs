//! Runtime core for compiled Pug-style templates.
//!
//! Generated render code calls into this crate to evaluate the expressions
//! embedded in markup: arithmetic, comparison, indexing and a fixed table of
//! builtin helpers, all over dynamically typed values.

pub mod api;
pub mod ops;
pub mod stdlib;
pub mod values;

pub use api::{Error, Output, Runtime, RuntimeOptions, RuntimeOptionsOverride};
pub use values::{Host, Object, Reflect, SafeKind, SafeString, Value, convert};
