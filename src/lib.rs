//! pugrt - runtime support for compiled Pug templates
//!
//! # Overview
//!
//! A Pug template compiles to render code that cannot evaluate its embedded
//! expressions on its own. Every `a + b`, `items[i]`, `x == y` or helper
//! call becomes a call into this runtime, which works over dynamically typed
//! values:
//!
//! - **Conversion**: any host value becomes a [`Value`] through [`convert`]
//! - **Operators**: arithmetic, comparison and indexing that never fail
//! - **Builtins**: a fixed, name-keyed table of helpers (`attr`, `json`,
//!   `_Range`, `extend`, ...)
//!
//! # Quick Start
//!
//! ```
//! use pugrt::{Host, Runtime, RuntimeOptions, Value};
//!
//! // Build the table once at startup
//! let runtime = Runtime::with_builtins(RuntimeOptions::default()).unwrap();
//!
//! // `each i in _Range(3)`
//! let range = runtime.call("_Range", &[Host::from(3)]).unwrap().into_value();
//! assert_eq!(range.to_string(), "0,1,2");
//!
//! // `user.name + "!"`
//! let user = Host::map([("name", "ada")]);
//! let name = runtime.call("tryindex", &[user, Host::from("name")]).unwrap();
//! let greeting = runtime
//!     .call("__op__add", &[name.into_host(), Host::from("!")])
//!     .unwrap();
//! assert_eq!(greeting.into_value(), Value::from("ada!"));
//! ```
//!
//! # Safe strings
//!
//! Builtins that build markup (`raw`, `tagopen`, `sc`, `json`, ...) return
//! a [`SafeString`] tagged with the output context it may be emitted into
//! without escaping:
//!
//! ```
//! use pugrt::{Host, Runtime, RuntimeOptions, SafeKind};
//!
//! let runtime = Runtime::with_builtins(RuntimeOptions::default()).unwrap();
//! let out = runtime.call("tagopen", &[Host::from("div"), Host::from("")]).unwrap();
//! let tag = out.as_safe().unwrap();
//! assert_eq!(tag.kind, SafeKind::Html);
//! assert_eq!(tag.as_str(), "<div");
//! ```

// Re-export public API from pugrt_core
pub use pugrt_core::api::{
    Arity, Builtin, BuiltinFn, CallContext, Error, Output, RegistryBuilder, Runtime,
    RuntimeOptions, RuntimeOptionsOverride,
};

// Re-export values and the operator engine
pub use pugrt_core::values::{
    self, Host, Object, Reflect, SafeKind, SafeString, Value, convert,
};
pub use pugrt_core::{ops, stdlib};
