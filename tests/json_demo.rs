//! Integration tests for the JSON-primitive demonstration grammar (spec §14.4), replaying
//! `test/test_json.py`'s scenarios. Compiled only when the `demo` feature is enabled.

#![cfg(feature = "demo")]

use ruleco::driver::parse;
use ruleco::json_demo::{grammar, number, primitive, string};
use ruleco::value::Value;

fn literal_of(result: ruleco::value::ResultTuple) -> String {
    match result.into_iter().next() {
        Some(Value::Literal(s)) => s,
        other => panic!("expected a single literal, got {other:?}"),
    }
}

#[test]
fn number_parses_every_sign_and_decimal_shape() {
    for (input, expected) in [
        ("1234", 1234.0),
        ("1234.", 1234.0),
        ("1234.5678", 1234.5678),
        (".1234", 0.1234),
        ("+1234", 1234.0),
        ("-.1234", -0.1234),
    ] {
        let captured = literal_of(parse(&number(), input.chars(), false).unwrap());
        assert_eq!(captured.parse::<f64>().unwrap(), expected);
    }
}

#[test]
fn string_handles_escapes_and_plain_text() {
    assert_eq!(
        literal_of(parse(&string(), "\"hello there\"".chars(), false).unwrap()),
        "hello there"
    );
    assert_eq!(
        literal_of(parse(&string(), "\"\\t\\n\"".chars(), false).unwrap()),
        "\t\n"
    );
}

#[test]
fn primitive_routes_to_the_matching_alternative() {
    assert_eq!(
        literal_of(parse(&primitive(), "\"hello, there!\"".chars(), false).unwrap()),
        "hello, there!"
    );
    assert_eq!(
        literal_of(parse(&primitive(), "1234.5678".chars(), false).unwrap()),
        "1234.5678"
    );
    assert_eq!(
        literal_of(parse(&primitive(), "null".chars(), false).unwrap()),
        "null"
    );
}

#[test]
fn grammar_exposes_every_rule_by_name() {
    let g = grammar();
    assert!(g.run("primitive", "true".chars(), false).is_ok());
    assert!(g.run("hex8", "41".chars(), false).is_ok());
}
