//! Runtime setup shared across commands.

use pugrt::{Runtime, RuntimeOptions};

use super::CliResult;

/// Build the runtime with the standard builtin table.
pub fn build_runtime(options: RuntimeOptions) -> CliResult<Runtime> {
    let runtime = Runtime::with_builtins(options)?;
    tracing::debug!(builtins = runtime.len(), "runtime ready");
    Ok(runtime)
}
