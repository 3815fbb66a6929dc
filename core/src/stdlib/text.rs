//! Text builtins: `__`, `s`, `attr` and `json`.

use super::{arg, text_of};
use crate::api::{Arity, CallContext, Error, Output, RegistryBuilder};
use crate::values::{Host, SafeString};

pub fn register_text_builtins(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .bind("__", Arity::AtLeast(0), builtin_namespace)
        .bind("s", Arity::AtLeast(0), builtin_s)
        .bind("attr", Arity::Exact(2), builtin_attr)
        .bind("json", Arity::Exact(1), builtin_json)
}

/// Join the string forms of `parts` with `separator`.
pub fn namespace(parts: &[Host], separator: &str) -> String {
    parts
        .iter()
        .map(text_of)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Join the string forms of the non-nil `parts` with single spaces.
///
/// A non-empty result is trimmed and gets one leading space, ready to follow
/// a tag name or another attribute. A result of at most one byte is treated
/// as empty, so `spaced(["a"])` is `""`.
pub fn spaced(parts: &[Host]) -> String {
    let joined = parts
        .iter()
        .filter(|part| !part.is_nil())
        .map(text_of)
        .collect::<Vec<_>>()
        .join(" ");

    if joined.len() > 1 {
        format!(" {}", joined.trim())
    } else {
        String::new()
    }
}

/// Prefix every space-separated token of `value` with `prefix-`.
///
/// Splits on single spaces, so runs of spaces yield empty tokens. A nil
/// value gives the empty string.
pub fn prefix_tokens(value: &Host, prefix: &Host) -> String {
    if value.is_nil() {
        return String::new();
    }
    let value = text_of(value);
    let prefix = text_of(prefix);

    value
        .split(' ')
        .map(|token| format!("{prefix}-{token}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Encode `value` as JSON.
pub fn json(value: &Host) -> Result<SafeString, Error> {
    let text = serde_json::to_string(value)?;
    Ok(SafeString::js(text))
}

fn builtin_namespace(ctx: &CallContext<'_>, args: &[Host]) -> Result<Output, Error> {
    Ok(Output::Str(namespace(
        args,
        &ctx.options().namespace_separator,
    )))
}

fn builtin_s(_ctx: &CallContext<'_>, args: &[Host]) -> Result<Output, Error> {
    Ok(Output::Str(spaced(args)))
}

fn builtin_attr(_ctx: &CallContext<'_>, args: &[Host]) -> Result<Output, Error> {
    Ok(Output::Str(prefix_tokens(arg(args, 0), arg(args, 1))))
}

fn builtin_json(_ctx: &CallContext<'_>, args: &[Host]) -> Result<Output, Error> {
    let encoded = json(arg(args, 0)).inspect_err(|err| {
        tracing::debug!(error = %err, "json builtin failed");
    })?;
    Ok(Output::Safe(encoded))
}

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;
