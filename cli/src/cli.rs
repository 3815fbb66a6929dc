//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions and the mapping of
//! global flags onto runtime options. All command implementations are in
//! the `commands` module.

use clap::{Args, Parser, Subcommand};
use pugrt::RuntimeOptions;

/// pugrt - runtime builtins for compiled Pug templates
#[derive(Parser, Debug)]
#[command(name = "pugrt", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Separator used by the `__` namespace builtin
    #[arg(long, global = true, default_value = "::")]
    pub separator: String,

    /// Log unsupported operator combinations as warnings
    #[arg(long, global = true)]
    pub warn_sentinels: bool,

    /// Largest array `_Range` may produce
    #[arg(long, global = true, value_name = "LEN")]
    pub max_range: Option<usize>,
}

impl Cli {
    pub fn runtime_options(&self) -> RuntimeOptions {
        RuntimeOptions {
            namespace_separator: self.separator.clone(),
            warn_on_sentinel: self.warn_sentinels,
            max_range_len: self.max_range,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Call a builtin with JSON arguments
    Call(CallArgs),

    /// List the registered builtins
    List,
}

/// Arguments for the `call` command.
#[derive(Args, Debug)]
pub struct CallArgs {
    /// Builtin to call
    pub name: String,

    /// Arguments, each parsed as JSON (plain text when not valid JSON)
    #[arg(allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_become_options() {
        let cli = Cli::parse_from(["pugrt", "list", "--separator", ".", "--max-range", "4"]);
        let options = cli.runtime_options();
        assert_eq!(options.namespace_separator, ".");
        assert_eq!(options.max_range_len, Some(4));
        assert!(!options.warn_on_sentinel);
    }
}
