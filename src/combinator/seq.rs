//! Left-to-right sequencing.

use crate::compile::RuleExpr;
use crate::error::RuleError;
use crate::lib::Vec;
use crate::rule::{Char, Rule, RuleResult};

/// Runs a fixed list of sub-rules in order, concatenating their captures.
///
/// Each child is compiled only once its predecessor has succeeded — a child nested deeper in the
/// sequence (e.g. a rule that refers back to the grammar's own entry point) is never instantiated
/// before the input actually reaches it.
pub struct Seq {
    children: Vec<RuleExpr>,
    index: usize,
    current: Option<Box<dyn Rule>>,
    accumulated: Vec<crate::value::Value>,
}

impl Seq {
    /// Builds a session over `children`. Fails at construction if `children` is empty.
    pub fn new(children: Vec<RuleExpr>) -> Result<Self, RuleError> {
        if children.is_empty() {
            return Err(RuleError::EmptyRule);
        }
        Ok(Seq {
            children,
            index: 0,
            current: None,
            accumulated: Vec::new(),
        })
    }
}

impl Rule for Seq {
    fn resume(&mut self, current: Char) -> RuleResult {
        if self.current.is_none() {
            let compiled = match self.children[self.index].compile() {
                Ok(r) => r,
                // A later child's shape is only validated once the sequence actually reaches it
                // (per the lazy-compilation doc above). A `RuleError` found here is a structural
                // grammar defect, not a parse failure, so it propagates as `Fatal` rather than
                // being reported as an ordinary, `Or`/`Opt`-recoverable `Failure`.
                Err(e) => return RuleResult::Fatal(e),
            };
            self.current = Some(compiled);
        }
        let rule = self.current.as_mut().expect("just compiled above");
        match rule.resume(current) {
            RuleResult::Pending { reconsume } => RuleResult::Pending { reconsume },
            RuleResult::Success { value, reconsume } => {
                self.accumulated.extend(value);
                self.index += 1;
                self.current = None;
                if self.index == self.children.len() {
                    RuleResult::Success {
                        value: core::mem::take(&mut self.accumulated),
                        reconsume,
                    }
                } else {
                    RuleResult::Pending { reconsume }
                }
            }
            RuleResult::Failure(e) => RuleResult::Failure(e),
            RuleResult::Fatal(e) => RuleResult::Fatal(e),
        }
    }
}

/// Builds a rule expression running `children` in order and concatenating their captures.
pub fn seq(children: impl IntoIterator<Item = RuleExpr>) -> RuleExpr {
    RuleExpr::seq(children)
}
