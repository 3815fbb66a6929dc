//! Operator entry points: `__op__*`, `neq` and `tryindex`.
//!
//! These adapt the render code's arguments to [`crate::ops`] and tag the
//! results with the kind the call site expects.

use super::arg;
use crate::api::{Arity, CallContext, Error, Output, RegistryBuilder};
use crate::ops::{self, is_no_value};
use crate::values::Host;

pub fn register_operator_builtins(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .bind("__op__add", Arity::Exact(2), builtin_add)
        .bind("__op__inc", Arity::Exact(1), builtin_inc)
        .bind("__op__sub", Arity::Range(1, 2), builtin_sub)
        .bind("__op__mul", Arity::Exact(2), builtin_mul)
        .bind("__op__quo", Arity::Exact(2), builtin_quo)
        .bind("__op__slash", Arity::Exact(2), builtin_quo)
        .bind("__op__rem", Arity::Exact(2), builtin_rem)
        .bind("__op__mod", Arity::Exact(2), builtin_rem)
        .bind("__op__minus", Arity::Exact(1), builtin_minus)
        .bind("__op__plus", Arity::Exact(1), builtin_plus)
        .bind("__op__eql", Arity::Exact(2), builtin_eql)
        .bind("__op__gtr", Arity::Exact(2), builtin_gtr)
        .bind("__op__lss", Arity::Exact(2), builtin_lss)
        .bind("neq", Arity::Exact(2), builtin_neq)
        .bind("tryindex", Arity::Exact(2), builtin_tryindex)
}

/// Wrap an arithmetic result, reporting the sentinel if that is what it is.
fn arithmetic(ctx: &CallContext<'_>, name: &str, result: Host) -> Result<Output, Error> {
    if is_no_value(&result) {
        ctx.note_sentinel(name);
    }
    Ok(Output::Host(result))
}

fn builtin_add(ctx: &CallContext<'_>, args: &[Host]) -> Result<Output, Error> {
    let result = ops::add(arg(args, 0), arg(args, 1));
    if result.is_nil() {
        ctx.note_sentinel("__op__add");
    }
    Ok(Output::Value(result))
}

fn builtin_inc(_ctx: &CallContext<'_>, args: &[Host]) -> Result<Output, Error> {
    Ok(Output::Int(ops::inc(arg(args, 0))))
}

/// The render code passes the subtrahend first: `__op__sub(y, x)` is
/// `x - y`, and `__op__sub(y)` is `0 - y`.
fn builtin_sub(ctx: &CallContext<'_>, args: &[Host]) -> Result<Output, Error> {
    let result = match args {
        [y] => ops::sub(&Host::Int(0), y),
        _ => ops::sub(arg(args, 1), arg(args, 0)),
    };
    arithmetic(ctx, "__op__sub", result)
}

fn builtin_mul(ctx: &CallContext<'_>, args: &[Host]) -> Result<Output, Error> {
    arithmetic(ctx, "__op__mul", ops::mul(arg(args, 0), arg(args, 1)))
}

fn builtin_quo(ctx: &CallContext<'_>, args: &[Host]) -> Result<Output, Error> {
    arithmetic(ctx, "__op__quo", ops::quo(arg(args, 0), arg(args, 1)))
}

fn builtin_rem(ctx: &CallContext<'_>, args: &[Host]) -> Result<Output, Error> {
    arithmetic(ctx, "__op__rem", ops::rem(arg(args, 0), arg(args, 1)))
}

fn builtin_minus(ctx: &CallContext<'_>, args: &[Host]) -> Result<Output, Error> {
    arithmetic(ctx, "__op__minus", ops::minus(arg(args, 0)))
}

fn builtin_plus(ctx: &CallContext<'_>, args: &[Host]) -> Result<Output, Error> {
    arithmetic(ctx, "__op__plus", ops::plus(arg(args, 0)))
}

fn builtin_eql(_ctx: &CallContext<'_>, args: &[Host]) -> Result<Output, Error> {
    Ok(Output::Bool(ops::eql(arg(args, 0), arg(args, 1))))
}

fn builtin_gtr(_ctx: &CallContext<'_>, args: &[Host]) -> Result<Output, Error> {
    Ok(Output::Bool(ops::gtr(arg(args, 0), arg(args, 1))))
}

fn builtin_lss(_ctx: &CallContext<'_>, args: &[Host]) -> Result<Output, Error> {
    Ok(Output::Bool(ops::lss(arg(args, 0), arg(args, 1))))
}

fn builtin_neq(_ctx: &CallContext<'_>, args: &[Host]) -> Result<Output, Error> {
    Ok(Output::Bool(ops::neq(arg(args, 0), arg(args, 1))))
}

fn builtin_tryindex(_ctx: &CallContext<'_>, args: &[Host]) -> Result<Output, Error> {
    Ok(Output::Value(ops::tryindex(arg(args, 0), arg(args, 1))))
}

#[cfg(test)]
#[path = "operators_test.rs"]
mod operators_test;
