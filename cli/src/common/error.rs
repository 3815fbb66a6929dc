//! Error handling utilities for the CLI.

use pugrt::Error;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, Error>;

/// Print an error to stderr and exit with code 1.
pub fn render_and_exit(error: Error) -> ! {
    eprintln!("error: {error}");
    std::process::exit(1);
}
