//! # Error management
//!
//! Two error families exist:
//! - [`ParseError`] — recoverable by an enclosing [`Or`][crate::combinator::or]/[`Opt`][crate::combinator::opt],
//!   fatal otherwise. Raised mid-parse.
//! - [`RuleError`] — structural problems with a rule expression, raised by [`RuleExpr::compile`][crate::compile::RuleExpr::compile].
//!   `Seq`/`Plus` compile their later children lazily, so a `compile()` call — and the `RuleError`
//!   it can raise — may happen partway through a match; [`crate::rule::RuleResult::Fatal`] is how
//!   that reaches the caller instead of being mistaken for an ordinary [`ParseError`].
//!
//! Neither type pulls in an error-derive crate: both carry their own `Display` and
//! `std::error::Error` impls, kept `no_std`-friendly.

use crate::lib::String;
use crate::lib::Vec;
use crate::lib::format;
use crate::lib::vec;
use core::fmt;

use crate::rule::Char;

/// What was actually observed at the position a [`ParseError`] was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Got {
    /// A specific character was observed.
    Char(char),
    /// The input was exhausted.
    Eof,
    /// A semantic tag describing what was observed, for errors not tied to one character
    /// (e.g. the driver's `match_all` check — see [`crate::driver`]).
    Tag(&'static str),
}

impl From<Char> for Got {
    fn from(c: Char) -> Self {
        match c {
            Char::Scalar(c) => Got::Char(c),
            Char::Eof => Got::Eof,
        }
    }
}

impl fmt::Display for Got {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Got::Char(c) => write!(f, "{c:?}"),
            Got::Eof => write!(f, "<EOF>"),
            Got::Tag(t) => write!(f, "{t}"),
        }
    }
}

/// Raised when a rule session fails to match at the current position.
///
/// Carries `got` (what was actually seen) and `expected` (the human-readable expectations that
/// would have let the rule succeed). [`ParseError::combine`] is how a failed [`Or`][crate::combinator::or]
/// merges every alternative's expectations into one error.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    got: Option<Got>,
    expected: Vec<String>,
}

impl ParseError {
    /// Builds an error for a single unmet expectation at the given position.
    pub fn new(got: impl Into<Got>, expected: impl Into<String>) -> Self {
        ParseError {
            got: Some(got.into()),
            expected: vec![expected.into()],
        }
    }

    /// Builds an error carrying only a `got` tag and no `expected` list, for failures that
    /// describe what went wrong rather than what would have been accepted (e.g. the driver's
    /// `match_all` check — see [`crate::driver::parse`]).
    pub fn unexpected(got: impl Into<Got>) -> Self {
        ParseError {
            got: Some(got.into()),
            expected: Vec::new(),
        }
    }

    /// What was observed, if the error carries a position.
    pub fn got(&self) -> Option<Got> {
        self.got
    }

    /// The expectations that were not met.
    pub fn expected(&self) -> &[String] {
        &self.expected
    }

    /// Flattens a set of sibling failures (e.g. from every alternative of an [`Or`][crate::combinator::or])
    /// into one error whose `expected` list pairs each unmet expectation with the `got` of the
    /// error it came from.
    pub fn combine(errors: impl IntoIterator<Item = ParseError>) -> Self {
        let mut expected = Vec::new();
        for error in errors {
            let got = error.got;
            for exp in error.expected {
                match got {
                    Some(got) => expected.push(format!("{exp} but got '{got}' instead")),
                    None => expected.push(exp),
                }
            }
        }
        ParseError {
            got: None,
            expected,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.got, self.expected.len()) {
            (Some(got), 0) => write!(f, "unexpected: {got}"),
            (None, 0) => write!(f, "unknown parse error"),
            (None, 1) => write!(f, "expected: {}", self.expected[0]),
            (None, _) => {
                writeln!(f, "expected one of the following:")?;
                for e in &self.expected {
                    writeln!(f, "- {e}")?;
                }
                Ok(())
            }
            (Some(got), 1) => write!(f, "got: {got}, expected: {}", self.expected[0]),
            (Some(got), _) => {
                writeln!(f, "got: {got}, expected one of:")?;
                for e in &self.expected {
                    writeln!(f, "- {e}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// A rule expression had a shape the compiler could not make sense of.
///
/// Always constructed by a `compile()` call, but that call is not always made up front: `Seq`
/// and `Plus` compile their later children/iterations lazily, so this can surface mid-parse as
/// [`crate::rule::RuleResult::Fatal`] rather than only at the initial `parse()` call.
///
/// The Python original's `_build_rule` also raises `BadRuleException` for a shape matching none
/// of "callable", "string", "list", "tuple" — any other Python object. [`RuleExpr`][crate::compile::RuleExpr]
/// is a closed Rust enum covering exactly those shapes, so there is no value of that type left
/// for `RuleError` to reject; the case doesn't carry over.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleError {
    /// `Seq`/`rule!` was given zero children.
    EmptyRule,
    /// The value handed to [`crate::driver::parse`] as the starting rule was not a compiled rule.
    NotARule,
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleError::EmptyRule => write!(f, "cannot supply an empty rule"),
            RuleError::NotARule => write!(f, "the specified rule value is not actually a rule"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RuleError {}

/// The union of what [`crate::driver::parse`] can fail with (spec §6's exit conditions): a
/// mid-parse [`ParseError`] or a compile-time [`RuleError`]. The Python original lets either
/// exception type propagate unchanged from `Parser.parse`; this crate's equivalent is a single
/// `std::error::Error` type so callers can use one `?` against `parse`'s result.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The rule failed to match the input.
    Parse(ParseError),
    /// The rule expression itself was malformed.
    Rule(RuleError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<RuleError> for Error {
    fn from(e: RuleError) -> Self {
        Error::Rule(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(e) => fmt::Display::fmt(e, f),
            Error::Rule(e) => fmt::Display::fmt(e, f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            Error::Rule(e) => Some(e),
        }
    }
}
