//! The `call` command - call one builtin and print its result.

use pugrt::{Host, Output, RuntimeOptions};

use crate::cli::CallArgs;
use crate::common::{CliResult, input::parse_arg, runtime::build_runtime};

/// Run the call command.
pub fn run(args: CallArgs, options: RuntimeOptions) -> CliResult<()> {
    let runtime = build_runtime(options)?;
    let hosts: Vec<Host> = args.args.iter().map(|arg| parse_arg(arg)).collect();

    tracing::debug!(builtin = %args.name, args = hosts.len(), "calling builtin");
    let output = runtime.call(&args.name, &hosts)?;
    println!("{}", format_output(&output)?);
    Ok(())
}

/// Text printed for a builtin result.
///
/// Strings and safe strings are printed verbatim, primitives in their
/// natural form, and values as JSON.
pub fn format_output(output: &Output) -> CliResult<String> {
    let text = match output {
        Output::Str(s) => s.clone(),
        Output::Safe(safe) => safe.as_str().to_string(),
        Output::Bool(b) => b.to_string(),
        Output::Int(i) => i.to_string(),
        Output::Host(Host::Str(s)) => s.clone(),
        Output::Host(host) => serde_json::to_string(host)?,
        Output::Value(value) => serde_json::to_string(value)?,
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pugrt::{SafeString, Value};

    #[test]
    fn strings_are_verbatim() {
        let out = Output::Str("a b".to_string());
        assert_eq!(format_output(&out).unwrap(), "a b");

        let out = Output::Safe(SafeString::html("<p"));
        assert_eq!(format_output(&out).unwrap(), "<p");

        let out = Output::Host(Host::from("<nil>"));
        assert_eq!(format_output(&out).unwrap(), "<nil>");
    }

    #[test]
    fn values_are_json() {
        let out = Output::Value(Value::array([Value::Number(1.0), Value::from("x")]));
        assert_eq!(format_output(&out).unwrap(), r#"[1,"x"]"#);

        let out = Output::Host(Host::Float(0.5));
        assert_eq!(format_output(&out).unwrap(), "0.5");

        let out = Output::Value(Value::Nil);
        assert_eq!(format_output(&out).unwrap(), "null");
    }
}
