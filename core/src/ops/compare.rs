//! Equality and ordering.
//!
//! Numbers compare numerically with each other. A number compared with a
//! string is formatted first (integers as decimal, floats with six fixed
//! fractional digits) and the two texts are compared.

use super::{Operand, fixed};
use crate::values::Host;

/// `x == y` across kinds.
///
/// A boolean equals an integer when the boolean is `true` and the integer is
/// nonzero. The mirror (integer on the left) is outside the matrix and is
/// always `false`.
pub fn eql(x: &Host, y: &Host) -> bool {
    match (Operand::of(x), Operand::of(y)) {
        (Operand::Int(a), Operand::Int(b)) => a == b,
        (Operand::Int(a), Operand::Float(b)) => a as f64 == b,
        (Operand::Int(a), Operand::Str(b)) => a.to_string() == b,

        (Operand::Float(a), Operand::Int(b)) => a == b as f64,
        (Operand::Float(a), Operand::Float(b)) => a == b,
        (Operand::Float(a), Operand::Str(b)) => fixed(a) == b,

        (Operand::Str(a), Operand::Int(b)) => a == b.to_string(),
        (Operand::Str(a), Operand::Float(b)) => a == fixed(b),
        (Operand::Str(a), Operand::Str(b)) => a == b,

        (Operand::Bool(a), Operand::Int(b)) => a && b != 0,
        (Operand::Bool(a), Operand::Bool(b)) => a == b,

        _ => false,
    }
}

/// `x != y`, the negation of [`eql`].
pub fn neq(x: &Host, y: &Host) -> bool {
    !eql(x, y)
}

/// `x < y` across numeric and string kinds. Booleans are never ordered.
pub fn lss(x: &Host, y: &Host) -> bool {
    match (Operand::of(x), Operand::of(y)) {
        (Operand::Int(a), Operand::Int(b)) => a < b,
        (Operand::Int(a), Operand::Float(b)) => (a as f64) < b,
        (Operand::Int(a), Operand::Str(b)) => a.to_string().as_str() < b,

        (Operand::Float(a), Operand::Int(b)) => a < b as f64,
        (Operand::Float(a), Operand::Float(b)) => a < b,
        (Operand::Float(a), Operand::Str(b)) => fixed(a).as_str() < b,

        (Operand::Str(a), Operand::Int(b)) => a < b.to_string().as_str(),
        (Operand::Str(a), Operand::Float(b)) => a < fixed(b).as_str(),
        (Operand::Str(a), Operand::Str(b)) => a < b,

        _ => false,
    }
}

/// `x > y`, derived as "neither less than nor equal".
///
/// Kind pairs outside both matrices are neither less nor equal, so they
/// come out greater: `gtr(true, 1.5)` is `true`.
pub fn gtr(x: &Host, y: &Host) -> bool {
    !lss(x, y) && !eql(x, y)
}
