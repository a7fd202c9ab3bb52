//! One-or-more / zero-or-more repetition.

use crate::compile::RuleExpr;
use crate::lib::Vec;
use crate::rule::{Char, Rule, RuleResult};
use crate::value::Value;

/// One-or-more repetition of a sub-rule (spec §4.8).
///
/// Each iteration starts a fresh session of `expr` once its predecessor succeeds. A successful
/// iteration's capture is kept nested as a `Value::Tuple` rather than flattened — see
/// [`crate::util::flatten`] for the outer-layer opposite (spec §9's resolved open question).
pub struct Plus {
    expr: RuleExpr,
    current: Option<Box<dyn Rule>>,
    results: Vec<Value>,
}

impl Plus {
    /// Builds a session over `expr`, starting its first iteration lazily on the first resume.
    pub fn new(expr: RuleExpr) -> Self {
        Plus {
            expr,
            current: None,
            results: Vec::new(),
        }
    }
}

impl Rule for Plus {
    fn resume(&mut self, current: Char) -> RuleResult {
        if self.current.is_none() {
            match self.expr.compile() {
                Ok(rule) => self.current = Some(rule),
                // See `Seq::resume`: a later iteration's shape is only validated once it's
                // actually reached, and a `RuleError` found there is a structural grammar defect,
                // not a recoverable parse failure.
                Err(e) => return RuleResult::Fatal(e),
            }
        }
        let rule = self.current.as_mut().expect("just compiled above");
        match rule.resume(current) {
            RuleResult::Pending { reconsume } => RuleResult::Pending { reconsume },
            RuleResult::Success { value, reconsume } => {
                self.results.push(Value::Tuple(value));
                self.current = None;
                RuleResult::Pending { reconsume }
            }
            RuleResult::Failure(e) => {
                if self.results.is_empty() {
                    RuleResult::Failure(e)
                } else {
                    // The character that ended the run was never consumed by the failed final
                    // iteration, so it must be reconsumed by whatever runs next.
                    RuleResult::Success {
                        value: core::mem::take(&mut self.results),
                        reconsume: true,
                    }
                }
            }
            RuleResult::Fatal(e) => RuleResult::Fatal(e),
        }
    }
}

/// Builds a rule expression matching `expr` one or more times.
pub fn plus(expr: RuleExpr) -> RuleExpr {
    RuleExpr::rule(move || Ok(crate::trace::traced("Plus", Box::new(Plus::new(expr.clone())))))
}

/// Builds a rule expression matching `expr` zero or more times, defined as `Opt(Plus(expr))`
/// (spec §4.9) with the same reconsume discipline.
pub fn star(expr: RuleExpr) -> RuleExpr {
    crate::combinator::opt::opt(plus(expr))
}
