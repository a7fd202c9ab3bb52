//! Whole-grammar integration tests, replaying the scenarios from `test/test_basic.py` and
//! spec §8 (the "hello, Name!" grammar and a couple of failure-path/error-message scenarios).

use ruleco::combinator::discard::discard;
use ruleco::combinator::eof::eof;
use ruleco::combinator::literal::literal;
use ruleco::combinator::opt::opt;
use ruleco::combinator::or::or;
use ruleco::combinator::range::chr_range;
use ruleco::combinator::repeat::{plus, star};
use ruleco::compile::RuleExpr;
use ruleco::driver::parse;
use ruleco::value::Value;

fn hello_world() -> RuleExpr {
    RuleExpr::seq([
        discard(literal("hello")),
        discard(literal(",")),
        discard(plus(literal(" "))),
        plus(or([chr_range('a', 'z'), chr_range('A', 'Z')])),
        discard(star(literal("!"))),
        eof(),
    ])
}

fn name_from(result: ruleco::value::ResultTuple) -> String {
    result
        .into_iter()
        .map(|v| match v {
            Value::Tuple(t) => t
                .into_iter()
                .map(|v| match v {
                    Value::Char(c) => c,
                    other => panic!("expected a char, got {other:?}"),
                })
                .collect::<String>(),
            other => panic!("expected a nested tuple, got {other:?}"),
        })
        .collect()
}

#[test]
fn greets_a_name_with_trailing_punctuation() {
    let result = parse(&hello_world(), "hello,     Josh!!!".chars(), true).unwrap();
    assert_eq!(name_from(result), "Josh");
}

#[test]
fn greets_a_name_with_a_single_trailing_mark() {
    let result = parse(&hello_world(), "hello, Paul!".chars(), true).unwrap();
    assert_eq!(name_from(result), "Paul");
}

#[test]
fn greets_a_name_with_extra_spacing_and_no_punctuation() {
    let result = parse(&hello_world(), "hello,     Sheila".chars(), true).unwrap();
    assert_eq!(name_from(result), "Sheila");
}

#[test]
fn literal_reports_the_offending_character_and_position() {
    let err = parse(&literal("null"), "nul".chars(), true).unwrap_err();
    let message = format!("{err}");
    assert!(message.contains("'l' (in literal 'null')"));
    assert!(message.contains("<EOF>"));
}

#[test]
fn or_combines_every_alternative_expectation_on_failure() {
    let err = parse(&or([literal("hello"), literal("hi")]), "hey".chars(), true).unwrap_err();
    let message = format!("{err}");
    assert!(message.contains("literal 'hello'"));
    assert!(message.contains("literal 'hi'"));
}

#[test]
fn opt_never_fails() {
    let expr = opt(literal("hi"));
    assert!(parse(&expr, core::iter::empty(), true).is_ok());
}
