//! End-of-input matching.

use crate::error::ParseError;
use crate::lib::Vec;
use crate::rule::{Char, Rule, RuleResult};

/// Matches the end of input exactly, capturing nothing.
pub struct Eof;

impl Rule for Eof {
    fn resume(&mut self, current: Char) -> RuleResult {
        match current {
            Char::Eof => RuleResult::success(Vec::new()),
            other => RuleResult::Failure(ParseError::new(other, "<EOF>")),
        }
    }
}

/// Builds a rule expression matching end of input.
pub fn eof() -> crate::compile::RuleExpr {
    crate::compile::RuleExpr::rule(|| Ok(crate::trace::traced("Eof", Box::new(Eof))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::parse;

    #[test]
    fn matches_empty_input() {
        let result = parse(&eof(), core::iter::empty(), true).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn fails_when_input_remains() {
        assert!(parse(&eof(), "x".chars(), true).is_err());
    }
}
