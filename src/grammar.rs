//! A thin rule-registration and visitor-dispatch convenience layer (spec §14.1–§14.2).
//!
//! The distilled spec treats this as an external collaborator — "standard plumbing" the core
//! doesn't need to provide. It's supplemented here so the crate is runnable end to end, grounded
//! in `pegasus/parser.py`'s `rule()` decorator and `Parser` base class. Unlike the Python
//! original, there is no reflection-based method scanning: a [`Grammar`] is built explicitly by
//! registering named rule expressions, and dispatching a parsed result to a visitor callback is
//! left to the caller, exactly as the core leaves it (spec §6).

use crate::compile::RuleExpr;
use crate::error::{Error, RuleError};
use crate::lib::{String, Vec};
use crate::value::ResultTuple;

/// Associates a name with a sequence of rule expressions, mirroring `pegasus/parser.py:rule()`'s
/// `@rule(*rules)` decorator — but as a plain function, since this crate takes no `proc-macro`
/// dependency the teacher doesn't have either.
///
/// Rejects zero children with [`RuleError::EmptyRule`], exactly as the original raises
/// `EmptyRuleException`.
pub fn rule(children: impl IntoIterator<Item = RuleExpr>) -> Result<RuleExpr, RuleError> {
    let children: Vec<RuleExpr> = children.into_iter().collect();
    if children.is_empty() {
        return Err(RuleError::EmptyRule);
    }
    Ok(RuleExpr::seq(children))
}

/// A named collection of compiled rule expressions, mirroring `pegasus/parser.py:Parser`.
///
/// Unlike the original, which discovers `@rule`-annotated methods on a subclass via reflection,
/// a `Grammar` is populated explicitly with [`Grammar::register`].
pub struct Grammar {
    rules: Vec<(String, RuleExpr)>,
}

impl Grammar {
    /// Builds an empty grammar.
    pub fn new() -> Self {
        Grammar { rules: Vec::new() }
    }

    /// Registers `expr` under `name`, overwriting any prior registration of the same name.
    pub fn register(&mut self, name: impl Into<String>, expr: RuleExpr) -> &mut Self {
        let name = name.into();
        if let Some(slot) = self.rules.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = expr;
        } else {
            self.rules.push((name, expr));
        }
        self
    }

    /// Looks up the rule registered under `name`.
    pub fn get(&self, name: &str) -> Option<&RuleExpr> {
        self.rules.iter().find(|(n, _)| n == name).map(|(_, e)| e)
    }

    /// Runs the rule registered under `rule_name` against `input`, mirroring
    /// `pegasus/parser.py:Parser.parse`'s `NotARuleException` check when the named rule was
    /// never registered.
    pub fn run(
        &self,
        rule_name: &str,
        input: impl IntoIterator<Item = char>,
        match_all: bool,
    ) -> Result<ResultTuple, Error> {
        let expr = self
            .get(rule_name)
            .ok_or(Error::Rule(RuleError::NotARule))?;
        crate::driver::parse(expr, input, match_all)
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::literal::literal;
    use crate::value::Value;

    #[test]
    fn registers_and_runs_a_named_rule() {
        let mut grammar = Grammar::new();
        grammar.register("greeting", rule([literal("hi")]).unwrap());

        let result = grammar.run("greeting", "hi".chars(), true).unwrap();
        assert_eq!(result, crate::lib::vec![Value::Literal(String::from("hi"))]);
    }

    #[test]
    fn running_an_unregistered_rule_fails() {
        let grammar = Grammar::new();
        let err = grammar.run("missing", "hi".chars(), true).unwrap_err();
        assert_eq!(err, Error::Rule(RuleError::NotARule));
    }

    #[test]
    fn rule_rejects_zero_children() {
        assert!(matches!(rule(Vec::new()), Err(RuleError::EmptyRule)));
    }
}
