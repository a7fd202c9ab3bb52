//! Fixed-string matching.

use crate::error::ParseError;
use crate::lib::{format, vec, String, Vec};
use crate::rule::{Char, Rule, RuleResult};
use crate::value::Value;

/// Matches a fixed, non-empty string one character at a time.
pub struct Literal {
    text: String,
    chars: Vec<char>,
    index: usize,
}

impl Literal {
    /// Builds a session matching `s` from its first character.
    pub fn new(s: impl Into<String>) -> Self {
        let text = s.into();
        let chars = text.chars().collect();
        Literal {
            text,
            chars,
            index: 0,
        }
    }
}

impl Rule for Literal {
    fn resume(&mut self, current: Char) -> RuleResult {
        if self.chars.is_empty() {
            return RuleResult::success(Vec::new());
        }
        let want = self.chars[self.index];
        match current {
            Char::Scalar(c) if c == want => {
                self.index += 1;
                if self.index == self.chars.len() {
                    RuleResult::success(vec![Value::Literal(self.text.clone())])
                } else {
                    RuleResult::pending()
                }
            }
            other => RuleResult::Failure(ParseError::new(
                other,
                format!("'{want}' (in literal '{}')", self.text),
            )),
        }
    }
}

/// Builds a rule expression matching `s` verbatim.
pub fn literal(s: impl Into<String>) -> crate::compile::RuleExpr {
    let s = s.into();
    crate::compile::RuleExpr::rule(move || {
        Ok(crate::trace::traced(
            "Literal",
            Box::new(Literal::new(s.clone())),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::parse;

    #[test]
    fn matches_exact_string() {
        let result = parse(&literal("hi"), "hi".chars(), true).unwrap();
        assert_eq!(result, vec![Value::Literal(String::from("hi"))]);
    }

    #[test]
    fn fails_on_mismatch() {
        let err = parse(&literal("hi"), "ho".chars(), true).unwrap_err();
        assert!(err.to_string().contains("literal 'hi'"));
    }

    #[test]
    fn fails_on_early_eof() {
        assert!(parse(&literal("hi"), "h".chars(), true).is_err());
    }
}
