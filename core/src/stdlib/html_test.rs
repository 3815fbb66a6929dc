//! Tests for the HTML and CSS builtins

use pretty_assertions::assert_eq;

use super::*;
use crate::values::{SafeKind, Value};

#[test]
fn test_unescaped() {
    let html = unescaped(&Host::from("<b>hi</b>"));
    assert_eq!(html, SafeString::html("<b>hi</b>"));
}

#[test]
fn test_raw_spacing() {
    let parts = [Host::from(1), Host::from(2), Host::from("x"), Host::from(3)];
    assert_eq!(raw(&parts).as_str(), "1 2x3");
    assert_eq!(raw(&[Host::from("a"), Host::from("b")]).as_str(), "ab");
    assert_eq!(raw(&[Host::from(true), Host::Nil]).as_str(), "true ");
    assert_eq!(raw(&[]).as_str(), "");
}

#[test]
fn test_tagopen() {
    let tag = tagopen(&Host::from("div"), &Host::from("x:"));
    assert_eq!(tag.as_str(), "<x:div");
    assert_eq!(tag.kind, SafeKind::Html);
}

#[test]
fn test_style_concat() {
    let parts = [
        Host::from(10),
        Host::from("px "),
        Host::from(1.5),
        Host::from("em"),
        Host::from(true),
        Host::Nil,
    ];
    let css = style_concat(&parts);
    assert_eq!(css.as_str(), "10px 1.500000em");
    assert_eq!(css.kind, SafeKind::Css);
}

#[test]
fn test_style_concat_converted_number_is_float() {
    let css = style_concat(&[Host::from(Value::Number(3.0))]);
    assert_eq!(css.as_str(), "3.000000");
}

#[test]
fn test_style_concat_non_finite() {
    let css = style_concat(&[Host::from(f64::INFINITY), Host::from(" "), Host::from(f64::NAN)]);
    assert_eq!(css.as_str(), "+Inf NaN");
}

#[test]
fn test_extra_attributes() {
    let attrs = Host::map([
        ("class", " big "),
        ("id", "main"),
        ("data-x", "1"),
    ]);
    let known = [Host::from("id")];
    let html = extra_attributes(&attrs, &known);
    assert_eq!(html.as_str(), r#"class="big" data-x="1""#);
    assert_eq!(html.kind, SafeKind::HtmlAttr);
}

#[test]
fn test_extra_attributes_all_known_or_not_a_map() {
    let attrs = Host::map([("id", "main")]);
    assert_eq!(extra_attributes(&attrs, &[Host::from("id")]).as_str(), "");
    assert_eq!(extra_attributes(&Host::from("id"), &[]).as_str(), "");
}

#[test]
fn test_registered_builtins() {
    use crate::api::{Runtime, RuntimeOptions};

    let runtime = Runtime::new(RuntimeOptions::default(), register_html_builtins).unwrap();
    let out = runtime
        .call("__add_andattributes", &[Host::map([("title", "t")])])
        .unwrap();
    assert_eq!(out, Output::Safe(SafeString::html_attr(r#"title="t""#)));

    let out = runtime.call("sc", &[]).unwrap();
    assert_eq!(out.render(), "");
}
