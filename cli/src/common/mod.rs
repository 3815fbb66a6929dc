//! Common utilities shared across CLI commands.

pub mod error;
pub mod input;
pub mod runtime;

pub use error::CliResult;
