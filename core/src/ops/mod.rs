//! The operator engine.
//!
//! Each operator family has its own coercion matrix over [`Operand`] kinds.
//! Unsupported combinations never fail; they produce the family's sentinel:
//!
//! | family                          | sentinel              |
//! |---------------------------------|-----------------------|
//! | `add`                           | `Value::Nil`          |
//! | `sub`, `mul`, `quo`, `rem`      | the text [`NO_VALUE`] |
//! | `minus`, `plus`                 | the text [`NO_VALUE`] |
//! | `inc`                           | `0`                   |
//! | `eql`, `lss`, `gtr`             | `false`               |

pub mod arith;
pub mod compare;
pub mod index;

pub use arith::{add, inc, minus, mul, plus, quo, rem, sub};
pub use compare::{eql, gtr, lss, neq};
pub use index::tryindex;

use crate::values::{Host, Value};

/// The "no value" text the arithmetic family returns for unsupported operands.
pub const NO_VALUE: &str = "<nil>";

/// Whether `host` is the arithmetic family's sentinel.
pub fn is_no_value(host: &Host) -> bool {
    matches!(host, Host::Str(s) if s == NO_VALUE)
}

pub(crate) fn no_value(op: &'static str, x: &Host, y: Option<&Host>) -> Host {
    match y {
        Some(y) => tracing::debug!(
            op,
            lhs = x.kind_name(),
            rhs = y.kind_name(),
            "unsupported operands"
        ),
        None => tracing::debug!(op, operand = x.kind_name(), "unsupported operand"),
    }
    Host::Str(NO_VALUE.to_string())
}

/// Six-digit fixed format used when a float is compared with or spliced
/// into text. Non-finite values are spelled `+Inf`, `-Inf` and `NaN`.
pub(crate) fn fixed(x: f64) -> String {
    if x.is_nan() {
        "NaN".to_string()
    } else if x == f64::INFINITY {
        "+Inf".to_string()
    } else if x == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        format!("{x:.6}")
    }
}

/// How an operator sees one of its operands.
///
/// Host integers and floats keep their native kind. Already-converted values
/// classify by variant, so a `Value::Number` is always a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    Int(i64),
    Float(f64),
    Str(&'a str),
    Bool(bool),
    Other,
}

impl<'a> Operand<'a> {
    pub fn of(host: &'a Host) -> Self {
        match host {
            Host::Int(i) => Operand::Int(*i),
            Host::Float(x) => Operand::Float(*x),
            Host::Str(s) => Operand::Str(s),
            Host::Bool(b) => Operand::Bool(*b),
            Host::Value(value) => match value {
                Value::Number(n) => Operand::Float(*n),
                Value::Str(s) => Operand::Str(s),
                Value::Bool(b) => Operand::Bool(*b),
                _ => Operand::Other,
            },
            _ => Operand::Other,
        }
    }
}
