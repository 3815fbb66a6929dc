//! Arithmetic and unary operators.

use super::{Operand, no_value};
use crate::values::{Host, Value, convert};

/// `x + y`.
///
/// - string on the left: concatenation with the string form of `y`
/// - number + number: sum
/// - number + string: `y` parsed as a float (unparseable text counts as `0`)
///
/// Everything else is `Nil`.
pub fn add(x: &Host, y: &Host) -> Value {
    let x = convert(x);
    let y = convert(y);

    match (&x, &y) {
        (Value::Str(a), _) => Value::string(format!("{a}{y}")),
        (Value::Number(a), Value::Number(b)) => Value::Number(a + b),
        (Value::Number(a), Value::Str(b)) => Value::Number(a + b.parse::<f64>().unwrap_or(0.0)),
        _ => {
            tracing::debug!(
                op = "add",
                lhs = x.kind_name(),
                rhs = y.kind_name(),
                "unsupported operands"
            );
            Value::Nil
        }
    }
}

/// Shared matrix for the binary arithmetic operators.
///
/// Two integers go through `int`; any int/float mix is widened to floats.
fn numeric(
    op: &'static str,
    x: &Host,
    y: &Host,
    int: impl FnOnce(i64, i64) -> Host,
    float: impl FnOnce(f64, f64) -> f64,
) -> Host {
    match (Operand::of(x), Operand::of(y)) {
        (Operand::Int(a), Operand::Int(b)) => int(a, b),
        (Operand::Int(a), Operand::Float(b)) => Host::Float(float(a as f64, b)),
        (Operand::Float(a), Operand::Int(b)) => Host::Float(float(a, b as f64)),
        (Operand::Float(a), Operand::Float(b)) => Host::Float(float(a, b)),
        _ => no_value(op, x, Some(y)),
    }
}

/// `x - y`. Integer results wrap on overflow.
pub fn sub(x: &Host, y: &Host) -> Host {
    numeric("sub", x, y, |a, b| Host::Int(a.wrapping_sub(b)), |a, b| a - b)
}

/// `x * y`. Integer results wrap on overflow.
pub fn mul(x: &Host, y: &Host) -> Host {
    numeric("mul", x, y, |a, b| Host::Int(a.wrapping_mul(b)), |a, b| a * b)
}

/// `x / y`, always as a float, even for two integers.
pub fn quo(x: &Host, y: &Host) -> Host {
    numeric("quo", x, y, |a, b| Host::Float(a as f64 / b as f64), |a, b| a / b)
}

/// `x % y`, defined for two integers only.
///
/// The result takes the sign of the dividend. A zero divisor gives the
/// sentinel.
pub fn rem(x: &Host, y: &Host) -> Host {
    match (Operand::of(x), Operand::of(y)) {
        (Operand::Int(_), Operand::Int(0)) => no_value("rem", x, Some(y)),
        (Operand::Int(a), Operand::Int(b)) => Host::Int(a.wrapping_rem(b)),
        _ => no_value("rem", x, Some(y)),
    }
}

/// Unary `-x`.
pub fn minus(x: &Host) -> Host {
    match Operand::of(x) {
        Operand::Int(a) => Host::Int(a.wrapping_neg()),
        Operand::Float(a) => Host::Float(-a),
        _ => no_value("minus", x, None),
    }
}

/// Unary `+x`.
pub fn plus(x: &Host) -> Host {
    match Operand::of(x) {
        Operand::Int(a) => Host::Int(a),
        Operand::Float(a) => Host::Float(a),
        _ => no_value("plus", x, None),
    }
}

/// `x + 1` as an integer.
///
/// Floats are incremented first and then truncated toward zero, so
/// `inc(1.5) == 2` and `inc(-0.5) == 0`. Non-numbers give `0`.
pub fn inc(x: &Host) -> i64 {
    match Operand::of(x) {
        Operand::Int(a) => a.wrapping_add(1),
        // `as` saturates and maps NaN to 0
        Operand::Float(a) => (a + 1.0) as i64,
        _ => {
            tracing::debug!(op = "inc", operand = x.kind_name(), "unsupported operand");
            0
        }
    }
}
