//! The builtin function table.
//!
//! Builtins are grouped by concern:
//! - operators: `__op__*` entry points, `neq`, `tryindex`
//! - text: `__`, `s`, `attr`, `json`
//! - html: `unescaped`, `raw`, `tagopen`, `sc`, `__add_andattributes`
//! - collections: `null`, `_Range`, `__op__array`, `__op__map`, `extend`
//!
//! Each group exposes its helpers as plain Rust functions and registers thin
//! wrappers that adapt the render code's argument slice to them.

use crate::api::RegistryBuilder;
use crate::values::{Host, convert};

pub mod collections;
pub mod html;
pub mod operators;
pub mod text;

pub use collections::register_collection_builtins;
pub use html::register_html_builtins;
pub use operators::register_operator_builtins;
pub use text::register_text_builtins;

/// Register the complete builtin table.
///
/// # Example
///
/// ```
/// use pugrt_core::api::{Runtime, RuntimeOptions};
/// use pugrt_core::stdlib::register_builtins;
///
/// let runtime = Runtime::new(RuntimeOptions::default(), register_builtins).unwrap();
/// assert!(runtime.get("json").is_some());
/// ```
pub fn register_builtins(builder: RegistryBuilder) -> RegistryBuilder {
    let builder = register_operator_builtins(builder);
    let builder = register_text_builtins(builder);
    let builder = register_html_builtins(builder);
    register_collection_builtins(builder)
}

static NIL: Host = Host::Nil;

/// The `index`th argument, or nil when absent.
pub(crate) fn arg(args: &[Host], index: usize) -> &Host {
    args.get(index).unwrap_or(&NIL)
}

/// String form of an argument. Host integers are written exactly.
pub(crate) fn text_of(host: &Host) -> String {
    match host {
        Host::Int(i) => i.to_string(),
        other => convert(other).to_string(),
    }
}
