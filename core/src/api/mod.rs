//! Public API for the template runtime.
//!
//! Generated render code holds a [`Runtime`] and calls builtins by name:
//!
//! ```
//! use pugrt_core::api::{Runtime, RuntimeOptions};
//! use pugrt_core::values::Host;
//!
//! let runtime = Runtime::with_builtins(RuntimeOptions::default()).unwrap();
//! let attrs = runtime
//!     .call("attr", &[Host::from("primary large"), Host::from("btn")])
//!     .unwrap();
//! assert_eq!(attrs.render(), "btn-primary btn-large");
//! ```

pub mod error;
pub mod options;
pub mod output;
pub mod registry;
pub mod runtime;

pub use error::Error;
pub use options::{RuntimeOptions, RuntimeOptionsOverride};
pub use output::Output;
pub use registry::{Arity, Builtin, BuiltinFn, CallContext, RegistryBuilder};
pub use runtime::Runtime;
