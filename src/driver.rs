//! Pulls characters from a feed and resumes the top-level rule session to completion (spec §4.1).

use crate::compile::RuleExpr;
use crate::error::{Error, Got, ParseError};
use crate::rule::{Char, Rule, RuleResult};
use crate::value::ResultTuple;

/// Compiles `rule_expr` once, runs it against `input_chars`, and returns its captured result.
///
/// `input_chars` is any finite `IntoIterator<Item = char>` — a `&str`'s `.chars()`, a `Vec<char>`,
/// or a chain of either, mirroring the original's flattening over nested iterables (spec §6).
///
/// When `match_all` is true, the rule must consume the entirety of `input_chars` (through the
/// implicit end-of-input sentinel) to succeed; a rule that returns early while input remains
/// raises a [`ParseError`] (spec §4.1, scenario-tested by §8's property 1).
pub fn parse(
    rule_expr: &RuleExpr,
    input_chars: impl IntoIterator<Item = char>,
    match_all: bool,
) -> Result<ResultTuple, Error> {
    let mut rule = rule_expr.compile()?;
    let mut chars = input_chars.into_iter().peekable();

    let mut current = pull(&mut chars);

    loop {
        match rule.resume(current) {
            RuleResult::Pending { reconsume: false } => {
                current = pull(&mut chars);
            }
            // The current character was not consumed; re-offer it on the next resume without
            // touching the feed.
            RuleResult::Pending { reconsume: true } => {}
            RuleResult::Success { value, reconsume } => {
                let leftover = match current {
                    Char::Eof => false,
                    Char::Scalar(_) => reconsume || chars.peek().is_some(),
                };
                if match_all && leftover {
                    return Err(Error::Parse(ParseError::unexpected(Got::Tag(
                        "result (rule returned a result without fully exhausting input)",
                    ))));
                }
                return Ok(value);
            }
            RuleResult::Failure(e) => return Err(Error::Parse(e)),
            RuleResult::Fatal(e) => return Err(Error::Rule(e)),
        }
    }
}

fn pull(chars: &mut core::iter::Peekable<impl Iterator<Item = char>>) -> Char {
    match chars.next() {
        Some(c) => Char::Scalar(c),
        None => Char::Eof,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::eof::eof;
    use crate::combinator::literal::literal;

    #[test]
    fn returns_a_prefix_match_when_match_all_is_false() {
        let result = parse(&literal("hi"), "hi there".chars(), false).unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn rejects_a_prefix_match_when_match_all_is_true() {
        assert!(parse(&literal("hi"), "hi there".chars(), true).is_err());
    }

    #[test]
    fn matches_eof_on_empty_input() {
        assert!(parse(&eof(), core::iter::empty(), true).unwrap().is_empty());
    }
}
