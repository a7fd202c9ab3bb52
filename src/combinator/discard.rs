//! Syntactic noise: matches faithfully, captures nothing.

use crate::compile::RuleExpr;
use crate::error::RuleError;
use crate::lib::Vec;
use crate::rule::{Char, Rule, RuleResult};

/// Runs `r` faithfully but rewrites every success to an empty capture (spec §4.10). Used for
/// punctuation and whitespace a grammar needs to consume but a visitor never needs to see.
pub struct Discard {
    child: Box<dyn Rule>,
}

impl Discard {
    pub fn new(expr: RuleExpr) -> Result<Self, RuleError> {
        Ok(Discard {
            child: expr.compile()?,
        })
    }
}

impl Rule for Discard {
    fn resume(&mut self, current: Char) -> RuleResult {
        match self.child.resume(current) {
            RuleResult::Pending { reconsume } => RuleResult::Pending { reconsume },
            RuleResult::Success { reconsume, .. } => RuleResult::Success {
                value: Vec::new(),
                reconsume,
            },
            RuleResult::Failure(e) => RuleResult::Failure(e),
            RuleResult::Fatal(e) => RuleResult::Fatal(e),
        }
    }
}

/// Builds a rule expression running `expr` and discarding whatever it captures.
pub fn discard(expr: RuleExpr) -> RuleExpr {
    RuleExpr::rule(move || {
        Ok(crate::trace::traced(
            "Discard",
            Box::new(Discard::new(expr.clone())?),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::literal::literal;
    use crate::driver::parse;

    #[test]
    fn drops_the_captured_value() {
        let expr = discard(literal("hi"));
        let result = parse(&expr, "hi".chars(), true).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn still_fails_when_the_inner_rule_fails() {
        let expr = discard(literal("hi"));
        assert!(parse(&expr, "ho".chars(), true).is_err());
    }
}
