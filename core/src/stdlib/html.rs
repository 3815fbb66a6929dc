//! Builtins that produce output-safe fragments: `unescaped`, `raw`,
//! `tagopen`, `sc` and `__add_andattributes`.

use super::{arg, text_of};
use crate::api::{Arity, CallContext, Error, Output, RegistryBuilder};
use crate::ops::{Operand, fixed};
use crate::values::{Host, SafeString, convert};

pub fn register_html_builtins(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .bind("unescaped", Arity::Exact(1), builtin_unescaped)
        .bind("raw", Arity::AtLeast(0), builtin_raw)
        .bind("tagopen", Arity::Exact(2), builtin_tagopen)
        .bind("sc", Arity::AtLeast(0), builtin_sc)
        .bind("__add_andattributes", Arity::AtLeast(1), builtin_add_attributes)
}

/// Mark `text` as HTML that must not be escaped.
pub fn unescaped(text: &Host) -> SafeString {
    SafeString::html(text_of(text))
}

/// Concatenate the string forms of `parts` into raw HTML.
///
/// A space separates two adjacent operands when neither of them is a
/// string: `raw(1, 2, "x", 3) == "1 2x3"`.
pub fn raw(parts: &[Host]) -> SafeString {
    let mut html = String::new();
    let mut previous_is_str = true;
    for (i, part) in parts.iter().enumerate() {
        let is_str = matches!(Operand::of(part), Operand::Str(_));
        if i > 0 && !is_str && !previous_is_str {
            html.push(' ');
        }
        html.push_str(&text_of(part));
        previous_is_str = is_str;
    }
    SafeString::html(html)
}

/// The opening of a tag: `<` followed by `prefix` and `tag`.
pub fn tagopen(tag: &Host, prefix: &Host) -> SafeString {
    SafeString::html(format!("<{}{}", text_of(prefix), text_of(tag)))
}

/// Concatenate numbers and strings into a CSS fragment.
///
/// Integers are written in decimal, floats with six fractional digits and
/// strings verbatim. Other kinds are skipped.
pub fn style_concat(parts: &[Host]) -> SafeString {
    let mut css = String::new();
    for part in parts {
        match Operand::of(part) {
            Operand::Int(i) => css.push_str(&i.to_string()),
            Operand::Float(x) => css.push_str(&fixed(x)),
            Operand::Str(s) => css.push_str(s),
            Operand::Bool(_) | Operand::Other => {
                tracing::trace!(kind = part.kind_name(), "skipping non-css operand");
            }
        }
    }
    SafeString::css(css)
}

/// Render every entry of `attrs` whose key is not in `known` as
/// `key="value"`.
///
/// Entries keep the map's order, values are trimmed, and the whole fragment
/// is trimmed. Receivers that are not maps produce an empty fragment.
pub fn extra_attributes(attrs: &Host, known: &[Host]) -> SafeString {
    let attrs = convert(attrs);
    let Some(entries) = attrs.as_map() else {
        return SafeString::html_attr("");
    };
    let known: Vec<String> = known.iter().map(text_of).collect();

    let mut html = String::new();
    for (key, value) in entries {
        let key = key.to_string();
        if known.contains(&key) {
            continue;
        }
        html.push_str(&format!(" {}=\"{}\"", key, value.to_string().trim()));
    }
    SafeString::html_attr(html.trim())
}

fn builtin_unescaped(_ctx: &CallContext<'_>, args: &[Host]) -> Result<Output, Error> {
    Ok(Output::Safe(unescaped(arg(args, 0))))
}

fn builtin_raw(_ctx: &CallContext<'_>, args: &[Host]) -> Result<Output, Error> {
    Ok(Output::Safe(raw(args)))
}

fn builtin_tagopen(_ctx: &CallContext<'_>, args: &[Host]) -> Result<Output, Error> {
    Ok(Output::Safe(tagopen(arg(args, 0), arg(args, 1))))
}

fn builtin_sc(_ctx: &CallContext<'_>, args: &[Host]) -> Result<Output, Error> {
    Ok(Output::Safe(style_concat(args)))
}

fn builtin_add_attributes(_ctx: &CallContext<'_>, args: &[Host]) -> Result<Output, Error> {
    let known = args.get(1..).unwrap_or_default();
    Ok(Output::Safe(extra_attributes(arg(args, 0), known)))
}

#[cfg(test)]
#[path = "html_test.rs"]
mod html_test;
