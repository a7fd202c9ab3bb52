//! Rule expression normalization and compilation.
//!
//! A [`RuleExpr`] is what a user hands a combinator before it becomes a running session: a
//! compiled rule primitive, a string literal, an ordered-choice list, or a sequence. Compiling is
//! idempotent and shallow — each combinator compiles its own immediate children when it starts a
//! fresh session, never the whole tree up front, so the same `RuleExpr` can be resumed from
//! scratch as many times as an enclosing `Or`/`Plus` needs.

use alloc::rc::Rc;

use crate::error::RuleError;
use crate::lib::{String, Vec};
use crate::rule::Rule;

/// A rule expression, not yet running.
///
/// Built with [`RuleExpr::rule`], [`RuleExpr::literal`], [`RuleExpr::or`], [`RuleExpr::seq`], or
/// the `From<&str>`/`From<String>` impls; combined further by the functions in
/// [`crate::combinator`].
#[derive(Clone)]
pub enum RuleExpr {
    /// An already-compiled combinator, stored as a factory so a fresh session can be started on
    /// demand. The factory can fail: it may itself wrap further `RuleExpr`s (e.g. `Opt`/`Plus`
    /// wrapping a malformed nested `Seq`/`Or`) whose shape is only checked when this rule is
    /// actually reached.
    Rule(Rc<dyn Fn() -> Result<Box<dyn Rule>, RuleError>>),
    /// A string literal, compiled to [`Literal`][crate::combinator::literal::Literal].
    Literal(String),
    /// An ordered-choice list, compiled to [`Or`][crate::combinator::or::Or].
    Or(Vec<RuleExpr>),
    /// A sequence, compiled to [`Seq`][crate::combinator::seq::Seq].
    Seq(Vec<RuleExpr>),
}

impl RuleExpr {
    /// Wraps an already-built rule factory (what every function in [`crate::combinator`] returns).
    pub fn rule(factory: impl Fn() -> Result<Box<dyn Rule>, RuleError> + 'static) -> Self {
        RuleExpr::Rule(Rc::new(factory))
    }

    /// Builds a string-literal rule expression.
    pub fn literal(s: impl Into<String>) -> Self {
        RuleExpr::Literal(s.into())
    }

    /// Builds an ordered-choice rule expression.
    pub fn or(children: impl IntoIterator<Item = RuleExpr>) -> Self {
        RuleExpr::Or(children.into_iter().collect())
    }

    /// Builds a sequence rule expression.
    pub fn seq(children: impl IntoIterator<Item = RuleExpr>) -> Self {
        RuleExpr::Seq(children.into_iter().collect())
    }

    /// Starts a fresh session for this expression, normalizing it to a combinator per the rules
    /// above. `Seq`/`Or` compile their own children lazily, once per session they start.
    pub fn compile(&self) -> Result<Box<dyn Rule>, RuleError> {
        match self {
            RuleExpr::Rule(factory) => factory(),
            RuleExpr::Literal(s) => Ok(crate::trace::traced(
                "Literal",
                Box::new(crate::combinator::literal::Literal::new(s.clone())),
            )),
            RuleExpr::Or(children) => Ok(crate::trace::traced(
                "Or",
                Box::new(crate::combinator::or::Or::new(children.clone())?),
            )),
            RuleExpr::Seq(children) => Ok(crate::trace::traced(
                "Seq",
                Box::new(crate::combinator::seq::Seq::new(children.clone())?),
            )),
        }
    }
}

impl From<&str> for RuleExpr {
    fn from(s: &str) -> Self {
        RuleExpr::literal(s)
    }
}

impl From<String> for RuleExpr {
    fn from(s: String) -> Self {
        RuleExpr::literal(s)
    }
}
