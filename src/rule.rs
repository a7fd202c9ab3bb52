//! The rule session protocol: the contract every combinator resumes against.

use crate::error::{ParseError, RuleError};
use crate::value::ResultTuple;

/// A single position in the input stream: a Unicode scalar value, or the end-of-input sentinel.
///
/// The feed yields finite `Scalar` values then terminates with exactly one `Eof`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Char {
    /// An observed code point.
    Scalar(char),
    /// The input is exhausted.
    Eof,
}

impl Char {
    /// The underlying code point, if this isn't the end-of-input sentinel.
    pub fn as_char(self) -> Option<char> {
        match self {
            Char::Scalar(c) => Some(c),
            Char::Eof => None,
        }
    }
}

/// What a rule session reports after observing the current character.
///
/// Exactly one of these is returned per call to [`Rule::resume`]. A session that has yielded
/// `Success` or `Failure` is finished and must never be resumed again.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleResult {
    /// Still consuming. If `reconsume` is true, the current character was not consumed and must
    /// be offered again on the next resume.
    Pending {
        /// Re-offer the same character on the next resume.
        reconsume: bool,
    },
    /// The rule matched. `reconsume` means the last-offered character was lookahead and must be
    /// returned to the caller's input stream.
    Success {
        /// The captured output.
        value: ResultTuple,
        /// Re-offer the last-offered character to whatever runs next.
        reconsume: bool,
    },
    /// The rule failed to match at this position.
    Failure(ParseError),
    /// A rule expression reached mid-parse turned out to be structurally malformed (e.g. a
    /// `Seq`/`Plus` child compiled lazily on reaching it, per §4.5/§4.8, was itself an empty
    /// `Seq`/`Or`). Unlike `Failure`, this is not a recoverable parse failure: `RuleError` is a
    /// sibling of `ParseError`, not caught by `Or`/`Opt`'s failure handling, and propagates
    /// unchanged out of every combinator that did not raise it, all the way to the driver.
    Fatal(RuleError),
}

impl RuleResult {
    /// Shorthand for a non-reconsuming pending result.
    pub fn pending() -> Self {
        RuleResult::Pending { reconsume: false }
    }

    /// Shorthand for a reconsuming pending result.
    pub fn pending_reconsume() -> Self {
        RuleResult::Pending { reconsume: true }
    }

    /// Shorthand for a non-reconsuming success.
    pub fn success(value: ResultTuple) -> Self {
        RuleResult::Success {
            value,
            reconsume: false,
        }
    }

    /// Shorthand for a reconsuming success.
    pub fn success_reconsume(value: ResultTuple) -> Self {
        RuleResult::Success {
            value,
            reconsume: true,
        }
    }
}

/// One live instance of a rule: a suspendable matcher over a character stream.
///
/// A session is created fresh for each match attempt (see [`crate::compile::RuleExpr::compile`])
/// and discarded after it yields `Success` or `Failure`. Implementations hold only their own
/// accumulator state — a partial-match index for a literal, a live-alternatives set for an
/// ordered choice, a results list for a repetition — and own any sub-rule sessions they start.
pub trait Rule {
    /// Observes the current character without advancing past it, and reports the outcome.
    ///
    /// The caller is responsible for honoring `reconsume`: offering the same character again
    /// next time rather than pulling a new one from the feed.
    fn resume(&mut self, current: Char) -> RuleResult;
}
