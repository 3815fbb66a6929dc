//! pugrt CLI - call template runtime builtins from the command line.

use clap::Parser;
use pugrt_cli::cli::{Cli, Command};
use pugrt_cli::{commands, common};

fn main() {
    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();
    let options = cli.runtime_options();

    let result = match cli.command {
        Command::Call(args) => commands::call::run(args, options),
        Command::List => commands::list::run(options),
    };

    if let Err(e) = result {
        common::error::render_and_exit(e);
    }
}
