//! The `list` command - print every registered builtin.

use pugrt::RuntimeOptions;

use crate::common::{CliResult, runtime::build_runtime};

/// Run the list command.
pub fn run(options: RuntimeOptions) -> CliResult<()> {
    let runtime = build_runtime(options)?;
    for name in runtime.names() {
        println!("{name}");
    }
    Ok(())
}
