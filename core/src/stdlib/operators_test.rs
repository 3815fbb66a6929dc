//! Tests for the operator builtins

use pretty_assertions::assert_eq;

use crate::api::{Output, Runtime, RuntimeOptions};
use crate::ops::NO_VALUE;
use crate::values::{Host, Value};

fn call(name: &str, args: &[Host]) -> Output {
    let runtime = Runtime::new(RuntimeOptions::default(), super::register_operator_builtins)
        .expect("operator table should build");
    runtime
        .call(name, args)
        .unwrap_or_else(|err| panic!("{name} failed: {err}"))
}

#[test]
fn test_add() {
    assert_eq!(
        call("__op__add", &[Host::from(1), Host::from(2)]),
        Output::Value(Value::Number(3.0))
    );
    assert_eq!(
        call("__op__add", &[Host::from(true), Host::from(2)]),
        Output::Value(Value::Nil)
    );
}

#[test]
fn test_sub_binary_and_unary() {
    assert_eq!(
        call("__op__sub", &[Host::from(5), Host::from(2)]),
        Output::Host(Host::Int(-3))
    );
    assert_eq!(
        call("__op__sub", &[Host::from(5)]),
        Output::Host(Host::Int(-5))
    );
    assert_eq!(
        call("__op__sub", &[Host::from(2.5)]),
        Output::Host(Host::Float(-2.5))
    );
}

#[test]
fn test_sub_takes_subtrahend_first() {
    assert_eq!(
        call("__op__sub", &[Host::from(10), Host::from(3)]),
        Output::Host(Host::Int(-7))
    );
    assert_eq!(
        call("__op__sub", &[Host::from(0.5), Host::from(2)]),
        Output::Host(Host::Float(1.5))
    );
}

#[test]
fn test_aliases_match() {
    let args = [Host::from(7), Host::from(2)];
    assert_eq!(call("__op__slash", &args), call("__op__quo", &args));
    assert_eq!(call("__op__mod", &args), call("__op__rem", &args));
    assert_eq!(call("__op__mod", &args), Output::Host(Host::Int(1)));
}

#[test]
fn test_sentinel_output() {
    let out = call("__op__mul", &[Host::from("x"), Host::from(2)]);
    assert_eq!(out, Output::Host(Host::from(NO_VALUE)));
    assert_eq!(out.render(), "<nil>");
}

#[test]
fn test_inc() {
    assert_eq!(call("__op__inc", &[Host::from(1.5)]), Output::Int(2));
}

#[test]
fn test_unary_plus_minus() {
    assert_eq!(call("__op__minus", &[Host::from(4)]), Output::Host(Host::Int(-4)));
    assert_eq!(call("__op__plus", &[Host::from(4)]), Output::Host(Host::Int(4)));
}

#[test]
fn test_comparisons() {
    assert_eq!(call("__op__eql", &[Host::from(5), Host::from("5")]), Output::Bool(true));
    assert_eq!(call("neq", &[Host::from(5), Host::from("5")]), Output::Bool(false));
    assert_eq!(call("__op__lss", &[Host::from(1), Host::from(2)]), Output::Bool(true));
    assert_eq!(call("__op__gtr", &[Host::from(1), Host::from(2)]), Output::Bool(false));
}

#[test]
fn test_tryindex() {
    let list = Host::from(Value::array([Value::Number(10.0), Value::Number(20.0)]));
    assert_eq!(
        call("tryindex", &[list.clone(), Host::from(1)]),
        Output::Value(Value::Number(20.0))
    );
    assert_eq!(
        call("tryindex", &[list, Host::from(5)]),
        Output::Value(Value::Nil)
    );
}
