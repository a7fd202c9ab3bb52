//! A JSON-primitive demonstration grammar, behind the `demo` feature (spec §14.4).
//!
//! Grounded in `test/test_json.py`'s `JsonParser`: `bool_literal`, `digits`, `number`,
//! `hex_char`/`hex8`/`hex16`, `char_escape` (keyed off an `ESCAPES` table), `string`, and
//! `primitive`, layered on the same core combinators as the rest of this crate. This is an
//! integration-test fixture proving the combinator algebra scales past the hello-world grammar —
//! not a general JSON parser: there was no object/array support in the original fragment, so
//! none is added here.
//!
//! Two small rule types exist only in this module, built directly against [`crate::rule::Rule`]
//! rather than the core combinator set, because the distilled spec's combinator list (`Literal`,
//! `ChrRange`, `EOF`, `Seq`, `Or`, `Opt`, `Plus`, `Star`, `Discard`) has no "any character except"
//! or "join captured characters into a string" primitive: [`AnyExcept`] and the joining/mapping
//! wrappers below compose the existing primitives' output the way a caller is expected to when a
//! grammar needs something the core doesn't provide directly.

use crate::combinator::discard::discard;
use crate::combinator::literal::literal;
use crate::combinator::opt::opt;
use crate::combinator::or::or;
use crate::combinator::range::chr_range;
use crate::combinator::repeat::{plus, star};
use crate::compile::RuleExpr;
use crate::error::ParseError;
use crate::grammar::Grammar;
use crate::lib::{String, Vec};
use crate::rule::{Char, Rule, RuleResult};
use crate::util::flatten_tuple;
use crate::value::Value;

/// `'\' + key` escape sequences recognized by [`char_escape`], mirroring `test_json.py`'s
/// `ESCAPES` table.
const ESCAPES: &[(char, char)] = &[
    ('r', '\r'),
    ('n', '\n'),
    ('v', '\u{0B}'),
    ('t', '\t'),
    ('b', '\u{08}'),
    ('a', '\u{07}'),
    ('f', '\u{0C}'),
    ('0', '\0'),
    ('"', '"'),
    ('\\', '\\'),
];

/// Matches any character that is not one of `exclude`, capturing it verbatim. Fails on `<EOF>`
/// or any excluded character.
struct AnyExcept {
    exclude: &'static [char],
}

impl Rule for AnyExcept {
    fn resume(&mut self, current: Char) -> RuleResult {
        match current {
            Char::Scalar(c) if !self.exclude.contains(&c) => {
                RuleResult::success(crate::lib::vec![Value::Char(c)])
            }
            other => RuleResult::Failure(ParseError::new(
                other,
                "any character not in the excluded set",
            )),
        }
    }
}

fn any_except(exclude: &'static [char]) -> RuleExpr {
    RuleExpr::rule(move || Ok(crate::trace::traced("AnyExcept", Box::new(AnyExcept { exclude }))))
}

/// Runs `inner` and flattens+joins every captured `Char`/`Literal` into a single
/// `Value::Literal`, so a grammar built out of many single-character captures can hand a visitor
/// one assembled string (used by [`number`] and [`string`] below).
struct Joined {
    inner: Box<dyn Rule>,
}

impl Rule for Joined {
    fn resume(&mut self, current: Char) -> RuleResult {
        match self.inner.resume(current) {
            RuleResult::Pending { reconsume } => RuleResult::Pending { reconsume },
            RuleResult::Success { value, reconsume } => {
                let mut joined = String::new();
                for v in flatten_tuple(value) {
                    match v {
                        Value::Char(c) => joined.push(c),
                        Value::Literal(s) => joined.push_str(&s),
                        Value::Tuple(_) => unreachable!("flatten_tuple unwraps every Tuple"),
                    }
                }
                RuleResult::Success {
                    value: crate::lib::vec![Value::Literal(joined)],
                    reconsume,
                }
            }
            RuleResult::Failure(e) => RuleResult::Failure(e),
            RuleResult::Fatal(e) => RuleResult::Fatal(e),
        }
    }
}

fn joined(expr: RuleExpr) -> RuleExpr {
    RuleExpr::rule(move || {
        Ok(Box::new(Joined {
            inner: expr.compile()?,
        }))
    })
}

/// Runs `inner` to completion, then discards whatever it captured in favor of the fixed
/// character `out` — used to turn a matched escape key (e.g. `'n'`) into its decoded character
/// (e.g. `'\n'`).
struct MapChar {
    inner: Box<dyn Rule>,
    out: char,
}

impl Rule for MapChar {
    fn resume(&mut self, current: Char) -> RuleResult {
        match self.inner.resume(current) {
            RuleResult::Pending { reconsume } => RuleResult::Pending { reconsume },
            RuleResult::Success { reconsume, .. } => RuleResult::Success {
                value: crate::lib::vec![Value::Char(self.out)],
                reconsume,
            },
            RuleResult::Failure(e) => RuleResult::Failure(e),
            RuleResult::Fatal(e) => RuleResult::Fatal(e),
        }
    }
}

fn escape_key(key: char, out: char) -> RuleExpr {
    let inner = literal(String::from(key));
    RuleExpr::rule(move || {
        Ok(Box::new(MapChar {
            inner: inner.compile()?,
            out,
        }))
    })
}

/// Decodes a joined run of hex digits (from [`hex_digits`]) into the `char` it denotes.
struct HexToChar {
    inner: Box<dyn Rule>,
}

impl Rule for HexToChar {
    fn resume(&mut self, current: Char) -> RuleResult {
        match self.inner.resume(current) {
            RuleResult::Pending { reconsume } => RuleResult::Pending { reconsume },
            RuleResult::Success { value, reconsume } => {
                let hex = match value.first() {
                    Some(Value::Literal(s)) => s.clone(),
                    _ => String::new(),
                };
                let code = u32::from_str_radix(&hex, 16).unwrap_or(0);
                let ch = core::char::from_u32(code).unwrap_or('\u{FFFD}');
                RuleResult::Success {
                    value: crate::lib::vec![Value::Char(ch)],
                    reconsume,
                }
            }
            RuleResult::Failure(e) => RuleResult::Failure(e),
            RuleResult::Fatal(e) => RuleResult::Fatal(e),
        }
    }
}

fn hex_digits(count: usize) -> RuleExpr {
    let digit = hex_char();
    let inner = joined(RuleExpr::seq(crate::lib::vec![digit; count]));
    RuleExpr::rule(move || {
        Ok(Box::new(HexToChar {
            inner: inner.compile()?,
        }))
    })
}

/// `[0-9]`.
pub fn digit() -> RuleExpr {
    chr_range('0', '9')
}

/// `Plus(digit)`, mirroring `JsonParser.digits`.
pub fn digits() -> RuleExpr {
    plus(digit())
}

/// `['0'-'9', 'A'-'F', 'a'-'f']`, mirroring `JsonParser.hex_char`.
pub fn hex_char() -> RuleExpr {
    or([chr_range('0', '9'), chr_range('A', 'F'), chr_range('a', 'f')])
}

/// Two hex digits decoded to one `char`, mirroring `JsonParser.hex8`.
pub fn hex8() -> RuleExpr {
    hex_digits(2)
}

/// Four hex digits decoded to one `char`, mirroring `JsonParser.hex16`.
pub fn hex16() -> RuleExpr {
    hex_digits(4)
}

/// `\` followed by an escape key or a `\xHH`/`\uHHHH` code point, mirroring
/// `JsonParser.char_escape`.
pub fn char_escape() -> RuleExpr {
    let keys = ESCAPES
        .iter()
        .map(|(key, out)| escape_key(*key, *out))
        .collect::<Vec<_>>();
    let alternatives: Vec<RuleExpr> = keys
        .into_iter()
        .chain([
            RuleExpr::seq([discard(literal("x")), hex8()]),
            RuleExpr::seq([discard(literal("u")), hex16()]),
        ])
        .collect();
    RuleExpr::seq([discard(literal("\\")), RuleExpr::or(alternatives)])
}

/// `"true"` or `"false"`, mirroring `JsonParser.bool_literal`.
pub fn bool_literal() -> RuleExpr {
    or([literal("true"), literal("false")])
}

/// `null`, mirroring `JsonParser.null_literal`.
pub fn null_literal() -> RuleExpr {
    literal("null")
}

/// `[+-]? (digits ('.' digits?)? | digits? '.' digits)`, joined into a single captured string,
/// mirroring `JsonParser.number`.
pub fn number() -> RuleExpr {
    joined(RuleExpr::seq([
        opt(or([literal("+"), literal("-")])),
        or([
            RuleExpr::seq([digits(), opt(RuleExpr::seq([literal("."), opt(digits())]))]),
            RuleExpr::seq([opt(digits()), literal("."), digits()]),
        ]),
    ]))
}

/// `'"' (char_escape | any-character-except-`\`-or-`"`)* '"'`, joined into a single captured
/// string, mirroring `JsonParser.string`.
pub fn string() -> RuleExpr {
    RuleExpr::seq([
        discard(literal("\"")),
        joined(star(or([char_escape(), any_except(&['\\', '"'])]))),
        discard(literal("\"")),
    ])
}

/// `string | number | bool_literal | null_literal`, mirroring `JsonParser.primitive`.
pub fn primitive() -> RuleExpr {
    or([string(), number(), bool_literal(), null_literal()])
}

/// Builds a [`Grammar`] with every rule above registered under its name.
pub fn grammar() -> Grammar {
    let mut g = Grammar::new();
    g.register("digits", digits())
        .register("hex_char", hex_char())
        .register("hex8", hex8())
        .register("hex16", hex16())
        .register("char_escape", char_escape())
        .register("bool_literal", bool_literal())
        .register("null_literal", null_literal())
        .register("number", number())
        .register("string", string())
        .register("primitive", primitive());
    g
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::parse;

    fn literal_of(result: &[Value]) -> &str {
        match result.first() {
            Some(Value::Literal(s)) => s,
            other => panic!("expected a single literal, got {other:?}"),
        }
    }

    #[test]
    fn bool_literal_matches_both_keywords() {
        assert_eq!(
            literal_of(&parse(&bool_literal(), "true".chars(), false).unwrap()),
            "true"
        );
        assert_eq!(
            literal_of(&parse(&bool_literal(), "false".chars(), false).unwrap()),
            "false"
        );
    }

    #[test]
    fn number_captures_every_shape() {
        for input in [
            "1234", "1234.", "1234.5678", ".1234", "+1234", "+1234.", "+.1234", "+1234.5678",
            "-1234", "-1234.", "-.1234", "-1234.5678",
        ] {
            let result = parse(&number(), input.chars(), false).unwrap();
            assert_eq!(literal_of(&result), input);
        }
    }

    #[test]
    fn string_unescapes_recognized_sequences() {
        assert_eq!(
            literal_of(&parse(&string(), "\"hello\"".chars(), false).unwrap()),
            "hello"
        );
        assert_eq!(
            literal_of(&parse(&string(), "\"hello there\"".chars(), false).unwrap()),
            "hello there"
        );
        assert_eq!(
            literal_of(&parse(&string(), "\"\\n\"".chars(), false).unwrap()),
            "\n"
        );
        assert_eq!(
            literal_of(&parse(&string(), "\"\\\\\"".chars(), false).unwrap()),
            "\\"
        );
        assert_eq!(
            literal_of(&parse(&string(), "\"\\\\\\\"\"".chars(), false).unwrap()),
            "\\\""
        );
        assert_eq!(
            literal_of(&parse(&string(), "\"\\v\\t\\n\"".chars(), false).unwrap()),
            "\u{0B}\t\n"
        );
    }

    #[test]
    fn char_escape_decodes_hex_code_points() {
        let result = parse(&char_escape(), "\\x41".chars(), false).unwrap();
        assert_eq!(result, crate::lib::vec![Value::Char('A')]);

        let result = parse(&char_escape(), "\\u0041".chars(), false).unwrap();
        assert_eq!(result, crate::lib::vec![Value::Char('A')]);
    }

    #[test]
    fn primitive_dispatches_to_the_right_alternative() {
        assert_eq!(
            literal_of(&parse(&primitive(), "null".chars(), false).unwrap()),
            "null"
        );
        assert_eq!(
            literal_of(&parse(&primitive(), "\"hello, there!\"".chars(), false).unwrap()),
            "hello, there!"
        );
        assert_eq!(
            literal_of(&parse(&primitive(), "1234.5678".chars(), false).unwrap()),
            "1234.5678"
        );
        assert_eq!(
            literal_of(&parse(&primitive(), "true".chars(), false).unwrap()),
            "true"
        );
    }

    #[test]
    fn grammar_runs_every_registered_rule_by_name() {
        let g = grammar();
        assert_eq!(
            literal_of(&g.run("number", "42".chars(), false).unwrap()),
            "42"
        );
        assert!(g.run("nonexistent", "42".chars(), false).is_err());
    }
}
