//! Ordered choice with parallel lookahead.

use crate::compile::RuleExpr;
use crate::error::{ParseError, RuleError};
use crate::lib::Vec;
use crate::rule::{Char, Rule, RuleResult};

/// Runs every alternative's session in parallel over the same characters.
///
/// PEG ordered choice can't rewind a pull-only character feed, so `Or` never commits a character
/// until one alternative succeeds: every live alternative observes the same character on every
/// shared resume, and an alternative that would need more than the shared prefix simply fails and
/// drops out of the live set (spec §4.6).
pub struct Or {
    sessions: Vec<Box<dyn Rule>>,
    errors: Vec<ParseError>,
}

impl Or {
    /// Builds a session by compiling every alternative immediately, since all alternatives start
    /// "simultaneously" per spec §4.6 rather than lazily as `Seq`'s children do.
    pub fn new(children: Vec<RuleExpr>) -> Result<Self, RuleError> {
        if children.is_empty() {
            return Err(RuleError::EmptyRule);
        }
        let mut sessions = Vec::with_capacity(children.len());
        for child in &children {
            sessions.push(child.compile()?);
        }
        Ok(Or {
            sessions,
            errors: Vec::new(),
        })
    }
}

impl Rule for Or {
    fn resume(&mut self, current: Char) -> RuleResult {
        let mut i = 0;
        while i < self.sessions.len() {
            match self.sessions[i].resume(current) {
                RuleResult::Pending { .. } => i += 1,
                RuleResult::Success { value, reconsume } => {
                    return RuleResult::Success { value, reconsume };
                }
                RuleResult::Failure(e) => {
                    self.errors.push(e);
                    self.sessions.remove(i);
                }
                // A `RuleError` is a sibling of `ParseError`, never caught by `Or`'s failure
                // handling — it propagates immediately, abandoning every other live alternative.
                RuleResult::Fatal(e) => return RuleResult::Fatal(e),
            }
        }

        if self.sessions.is_empty() {
            RuleResult::Failure(ParseError::combine(core::mem::take(&mut self.errors)))
        } else {
            // Individual alternatives' reconsume requests are flattened to non-reconsume: none of
            // them has committed yet, so there's nothing to hand back to a parent early.
            RuleResult::pending()
        }
    }
}

/// Builds a rule expression matching the first alternative in `children` that succeeds.
pub fn or(children: impl IntoIterator<Item = RuleExpr>) -> RuleExpr {
    RuleExpr::or(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::literal::literal;
    use crate::driver::parse;
    use crate::value::Value;
    use crate::lib::String;

    #[test]
    fn first_matching_alternative_wins() {
        let expr = or([literal("true"), literal("false")]);
        let result = parse(&expr, "false".chars(), false).unwrap();
        assert_eq!(result, crate::lib::vec![Value::Literal(String::from("false"))]);
    }

    #[test]
    fn combines_errors_when_every_alternative_fails() {
        let expr = or([literal("hello"), literal("hi")]);
        let err = parse(&expr, "hey".chars(), true).unwrap_err();
        let message = crate::lib::format!("{err}");
        assert!(message.contains("literal 'hello'"));
        assert!(message.contains("literal 'hi'"));
    }

    #[test]
    fn empty_or_is_rejected() {
        assert!(RuleExpr::or(Vec::new()).compile().is_err());
    }

    #[test]
    fn a_malformed_alternative_reached_mid_match_aborts_every_sibling() {
        let expr = or([
            crate::compile::RuleExpr::seq([literal("a"), RuleExpr::seq(Vec::new())]),
            literal("b"),
        ]);
        let err = parse(&expr, "ax".chars(), true).unwrap_err();
        assert_eq!(err, crate::error::Error::Rule(crate::error::RuleError::EmptyRule));
    }
}
