//! The value model and the conversion engine.
//!
//! - [`Value`] is the closed set of runtime values.
//! - [`Host`] enumerates every native kind the runtime accepts as input.
//! - [`convert`] maps a host value into a [`Value`]; it never fails.

pub mod convert;
pub mod dynamic;
pub mod host;
pub mod object;
pub mod safe;
pub mod serialize;

pub use convert::convert;
pub use dynamic::Value;
pub use host::Host;
pub use object::{Object, Reflect};
pub use safe::{SafeKind, SafeString};

#[cfg(test)]
mod dynamic_test;
