//! Zero-or-one matching.

use crate::compile::RuleExpr;
use crate::error::RuleError;
use crate::lib::Vec;
use crate::rule::{Char, Rule, RuleResult};

/// Runs `r`; a failed `r` is swallowed into an empty, reconsuming success (spec §4.7).
pub struct Opt {
    child: Box<dyn Rule>,
}

impl Opt {
    /// Compiles `expr`'s session immediately — `Opt` always has something to run from the start.
    pub fn new(expr: RuleExpr) -> Result<Self, RuleError> {
        Ok(Opt {
            child: expr.compile()?,
        })
    }
}

impl Rule for Opt {
    fn resume(&mut self, current: Char) -> RuleResult {
        match self.child.resume(current) {
            RuleResult::Pending { reconsume } => RuleResult::Pending { reconsume },
            RuleResult::Success { value, reconsume } => RuleResult::Success { value, reconsume },
            // No input was committed by the failed attempt, so the character it was holding
            // must be re-offered to whatever runs next.
            RuleResult::Failure(_) => RuleResult::Success {
                value: Vec::new(),
                reconsume: true,
            },
            // A `RuleError` is a sibling of `ParseError`, never swallowed the way `Opt` swallows
            // an ordinary match failure — it propagates unchanged.
            RuleResult::Fatal(e) => RuleResult::Fatal(e),
        }
    }
}

/// Builds a rule expression matching `expr` zero or one times.
pub fn opt(expr: RuleExpr) -> RuleExpr {
    RuleExpr::rule(move || {
        Ok(crate::trace::traced("Opt", Box::new(Opt::new(expr.clone())?)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::literal::literal;
    use crate::driver::parse;
    use crate::value::Value;
    use crate::lib::String;

    #[test]
    fn matches_when_present() {
        let expr = opt(literal("hi"));
        let result = parse(&expr, "hi".chars(), true).unwrap();
        assert_eq!(result, crate::lib::vec![Value::Literal(String::from("hi"))]);
    }

    #[test]
    fn never_fails_when_absent() {
        let expr = opt(literal("hi"));
        let result = parse(&expr, core::iter::empty(), true).unwrap();
        assert!(result.is_empty());
    }
}
