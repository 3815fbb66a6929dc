//! Collection builtins: `null`, `_Range`, `__op__array`, `__op__map` and
//! `extend`.

use std::sync::Arc;

use indexmap::IndexMap;

use super::arg;
use crate::api::{Arity, CallContext, Error, Output, RegistryBuilder};
use crate::ops::Operand;
use crate::values::{Host, Value, convert};

pub fn register_collection_builtins(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .bind("null", Arity::Exact(0), builtin_null)
        .bind("_Range", Arity::Range(1, 2), builtin_range)
        .bind("__op__array", Arity::AtLeast(0), builtin_array)
        .bind("__op__map", Arity::AtLeast(0), builtin_map)
        .bind("extend", Arity::AtLeast(2), builtin_extend)
}

/// The integers in `[start, end)` as an array value.
///
/// Fails with [`Error::ResourceExceeded`] when the range is longer than
/// `limit`, or when its storage cannot be allocated.
pub fn range(start: i64, end: i64, limit: Option<usize>) -> Result<Value, Error> {
    let len = usize::try_from(end.saturating_sub(start)).unwrap_or(0);
    if let Some(limit) = limit.filter(|&limit| len > limit) {
        return Err(Error::ResourceExceeded(format!(
            "_Range({start}, {end}) would produce {len} elements, limit is {limit}"
        )));
    }

    let mut items = Vec::new();
    items.try_reserve_exact(len).map_err(|err| {
        Error::ResourceExceeded(format!(
            "_Range({start}, {end}) would produce {len} elements: {err}"
        ))
    })?;
    items.extend((start..end).map(Value::from));
    Ok(Value::Array(Arc::new(items)))
}

/// An array of the converted `items`.
pub fn array(items: &[Host]) -> Value {
    Value::array(items.iter().map(convert))
}

/// A map built from alternating keys and values.
///
/// A trailing key without a value maps to nil.
pub fn map_of_pairs(items: &[Host]) -> Value {
    Value::map(items.chunks(2).map(|pair| {
        let key = convert(&pair[0]);
        let value = pair.get(1).map(convert).unwrap_or(Value::Nil);
        (key, value)
    }))
}

/// Merge every source map into a copy of `dest`, later keys winning.
///
/// Keys already in `dest` keep their position. A `dest` that is not a map
/// starts out empty, and sources that are not maps are ignored. `deep` is
/// accepted but does not change the merge.
pub fn extend(deep: bool, dest: &Host, sources: &[Host]) -> Value {
    if deep {
        tracing::trace!("extend: deep merge requested, merging shallowly");
    }
    let mut merged: IndexMap<Value, Value> = match convert(dest) {
        Value::Map(entries) => Arc::unwrap_or_clone(entries),
        other => {
            tracing::debug!(kind = other.kind_name(), "extend: destination is not a map");
            IndexMap::new()
        }
    };
    for source in sources {
        match convert(source) {
            Value::Map(entries) => {
                for (key, value) in entries.iter() {
                    merged.insert(key.clone(), value.clone());
                }
            }
            other => {
                tracing::debug!(kind = other.kind_name(), "extend: skipping non-map source");
            }
        }
    }
    Value::Map(Arc::new(merged))
}

/// Read a range bound: integers as-is, floats truncated, anything else 0.
fn bound(host: &Host) -> i64 {
    match Operand::of(host) {
        Operand::Int(i) => i,
        Operand::Float(x) => x as i64,
        _ => 0,
    }
}

fn builtin_null(_ctx: &CallContext<'_>, _args: &[Host]) -> Result<Output, Error> {
    Ok(Output::Value(Value::Nil))
}

fn builtin_range(ctx: &CallContext<'_>, args: &[Host]) -> Result<Output, Error> {
    let (start, end) = match args {
        [end] => (0, bound(end)),
        _ => (bound(arg(args, 0)), bound(arg(args, 1))),
    };
    let value = range(start, end, ctx.options().max_range_len)?;
    Ok(Output::Value(value))
}

fn builtin_array(_ctx: &CallContext<'_>, args: &[Host]) -> Result<Output, Error> {
    Ok(Output::Value(array(args)))
}

fn builtin_map(_ctx: &CallContext<'_>, args: &[Host]) -> Result<Output, Error> {
    Ok(Output::Value(map_of_pairs(args)))
}

fn builtin_extend(_ctx: &CallContext<'_>, args: &[Host]) -> Result<Output, Error> {
    let deep = matches!(Operand::of(arg(args, 0)), Operand::Bool(true));
    let sources = args.get(2..).unwrap_or_default();
    Ok(Output::Value(extend(deep, arg(args, 1), sources)))
}

#[cfg(test)]
#[path = "collections_test.rs"]
mod collections_test;
