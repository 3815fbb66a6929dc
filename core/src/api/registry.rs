//! The builtin table and its builder.

use std::collections::BTreeMap;
use std::fmt;

use super::{Error, Output, RuntimeOptions};
use crate::values::Host;

/// Signature of every builtin.
///
/// Arguments arrive exactly as the render code passed them; the arity has
/// already been checked against the entry's [`Arity`].
pub type BuiltinFn = fn(&CallContext<'_>, &[Host]) -> Result<Output, Error>;

/// How many arguments a builtin accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    /// Inclusive bounds.
    Range(usize, usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Exact(n) => count == n,
            Arity::Range(min, max) => (min..=max).contains(&count),
            Arity::AtLeast(min) => count >= min,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{}", n),
            Arity::Range(min, max) => write!(f, "{} to {}", min, max),
            Arity::AtLeast(min) => write!(f, "at least {}", min),
        }
    }
}

/// A registered builtin.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub arity: Arity,
    pub func: BuiltinFn,
}

/// Resources available to a builtin while it runs.
pub struct CallContext<'a> {
    options: &'a RuntimeOptions,
}

impl<'a> CallContext<'a> {
    #[inline]
    pub fn new(options: &'a RuntimeOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> &'a RuntimeOptions {
        self.options
    }

    /// Report an operator sentinel at the configured level.
    pub fn note_sentinel(&self, builtin: &str) {
        if self.options.warn_on_sentinel {
            tracing::warn!(builtin, "operator produced a sentinel result");
        } else {
            tracing::debug!(builtin, "operator produced a sentinel result");
        }
    }
}

/// Builder for the builtin table.
///
/// Names are kept sorted. Binding a name twice is recorded and reported by
/// [`build`](Self::build).
#[derive(Default)]
pub struct RegistryBuilder {
    entries: BTreeMap<&'static str, Builtin>,
    duplicates: Vec<String>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a builtin. Returns the builder for chaining.
    pub fn bind(mut self, name: &'static str, arity: Arity, func: BuiltinFn) -> Self {
        if self.entries.contains_key(name) {
            self.duplicates.push(name.to_string());
            return self;
        }
        self.entries.insert(name, Builtin { name, arity, func });
        self
    }

    /// Finish the table, failing if any name was bound twice.
    pub fn build(mut self) -> Result<BTreeMap<&'static str, Builtin>, Error> {
        if !self.duplicates.is_empty() {
            return Err(Error::DuplicateBinding(std::mem::take(&mut self.duplicates)));
        }
        Ok(self.entries)
    }
}
