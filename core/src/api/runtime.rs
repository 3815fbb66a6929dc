//! The runtime: an immutable builtin table plus its options.

use std::borrow::Cow;
use std::collections::BTreeMap;

use super::registry::{Builtin, CallContext, RegistryBuilder};
use super::{Error, Output, RuntimeOptions, RuntimeOptionsOverride};
use crate::values::Host;

/// The builtin table handed to every render invocation.
///
/// Built once at startup and never mutated afterwards; share it by
/// reference across threads.
///
/// # Example
///
/// ```
/// use pugrt_core::api::{Output, Runtime, RuntimeOptions};
/// use pugrt_core::values::{Host, Value};
///
/// let runtime = Runtime::with_builtins(RuntimeOptions::default()).unwrap();
///
/// let range = runtime.call("_Range", &[Host::from(2), Host::from(5)]).unwrap();
/// assert_eq!(
///     range.into_value(),
///     Value::array([Value::Number(2.0), Value::Number(3.0), Value::Number(4.0)])
/// );
///
/// let joined = runtime.call("__", &[Host::from("app"), Host::from("title")]).unwrap();
/// assert_eq!(joined, Output::Str("app::title".to_string()));
/// ```
pub struct Runtime {
    options: RuntimeOptions,
    builtins: BTreeMap<&'static str, Builtin>,
}

impl Runtime {
    /// Create a runtime whose table is filled by `init`.
    ///
    /// Fails if `init` binds a name twice.
    pub fn new(
        options: RuntimeOptions,
        init: impl FnOnce(RegistryBuilder) -> RegistryBuilder,
    ) -> Result<Self, Error> {
        let builtins = init(RegistryBuilder::new()).build()?;
        tracing::debug!(builtins = builtins.len(), "builtin table ready");
        Ok(Self { options, builtins })
    }

    /// Create a runtime with the standard builtin table.
    pub fn with_builtins(options: RuntimeOptions) -> Result<Self, Error> {
        Self::new(options, crate::stdlib::register_builtins)
    }

    pub fn options(&self) -> &RuntimeOptions {
        &self.options
    }

    pub fn get(&self, name: &str) -> Option<&Builtin> {
        self.builtins.get(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.builtins.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.builtins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builtins.is_empty()
    }

    /// Call the builtin `name` with the runtime's default options.
    pub fn call(&self, name: &str, args: &[Host]) -> Result<Output, Error> {
        self.call_with(RuntimeOptionsOverride::default(), name, args)
    }

    /// Call the builtin `name`, overriding some options for this call only.
    pub fn call_with(
        &self,
        options_override: RuntimeOptionsOverride,
        name: &str,
        args: &[Host],
    ) -> Result<Output, Error> {
        let builtin = self
            .builtins
            .get(name)
            .ok_or_else(|| Error::UnknownFunction(name.to_string()))?;

        if !builtin.arity.accepts(args.len()) {
            return Err(Error::Arity {
                name: name.to_string(),
                expected: builtin.arity,
                got: args.len(),
            });
        }

        let options = if options_override.is_empty() {
            Cow::Borrowed(&self.options)
        } else {
            let mut options = self.options.clone();
            options.override_with(&options_override);
            Cow::Owned(options)
        };

        tracing::trace!(builtin = name, args = args.len(), "calling builtin");
        (builtin.func)(&CallContext::new(&options), args)
    }
}

#[cfg(test)]
#[path = "runtime_test.rs"]
mod runtime_test;
