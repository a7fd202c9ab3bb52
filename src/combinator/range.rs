//! Closed inclusive code point ranges.

use crate::error::ParseError;
use crate::lib::{format, vec};
use crate::rule::{Char, Rule, RuleResult};
use crate::value::Value;

/// Matches a single character whose code point falls in `[lo, hi]`.
pub struct ChrRange {
    lo: char,
    hi: char,
}

impl ChrRange {
    /// Builds a session matching one character in the inclusive range `lo..=hi`.
    pub fn new(lo: char, hi: char) -> Self {
        ChrRange { lo, hi }
    }
}

impl Rule for ChrRange {
    fn resume(&mut self, current: Char) -> RuleResult {
        match current {
            Char::Scalar(c) if c >= self.lo && c <= self.hi => {
                RuleResult::success(vec![Value::Char(c)])
            }
            other => RuleResult::Failure(ParseError::new(
                other,
                format!("character in class [{}-{}]", self.lo, self.hi),
            )),
        }
    }
}

/// Builds a rule expression matching one character in `lo..=hi`.
pub fn chr_range(lo: char, hi: char) -> crate::compile::RuleExpr {
    crate::compile::RuleExpr::rule(move || {
        Ok(crate::trace::traced("ChrRange", Box::new(ChrRange::new(lo, hi))))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::parse;

    #[test]
    fn matches_in_range() {
        let result = parse(&chr_range('a', 'z'), "m".chars(), true).unwrap();
        assert_eq!(result, vec![Value::Char('m')]);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(parse(&chr_range('a', 'z'), "M".chars(), true).is_err());
    }
}
