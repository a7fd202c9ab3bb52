//! `ruleco` is a character-streaming PEG-style parser combinator engine.
//!
//! A grammar is built out of small, reusable *rules* — [`Literal`][combinator::literal],
//! [`ChrRange`][combinator::range], [`Eof`][combinator::eof] — composed with
//! [`Seq`][combinator::seq], [`Or`][combinator::or], [`Opt`][combinator::opt],
//! [`Plus`/`Star`][combinator::repeat], and [`Discard`][combinator::discard]. The composed rule
//! is handed to [`parse`][driver::parse] along with an input character stream.
//!
//! Every rule is a *co-routine* over a one-character-at-a-time feed: on each resume it observes
//! the current character without advancing, and either keeps consuming, asks for the same
//! character again ("reconsume"), succeeds with a captured [`ResultTuple`][error::Value], or
//! fails with a [`ParseError`][error::ParseError]. [`rule::Rule`] and [`rule::RuleResult`] specify
//! that protocol; [`combinator`] implements the composition algebra over it; [`driver`] runs it to
//! completion.
//!
//! ```rust
//! use ruleco::combinator::{discard, literal, or, range, repeat::plus, eof};
//! use ruleco::compile::RuleExpr;
//! use ruleco::driver::parse;
//!
//! let greeting = RuleExpr::seq(vec![
//!     discard::discard(literal::literal("hello, ")),
//!     plus(or::or(vec![
//!         range::chr_range('a', 'z'),
//!         range::chr_range('A', 'Z'),
//!     ])),
//!     discard::discard(eof::eof()),
//! ]);
//!
//! let result = parse(&greeting, "hello, Josh".chars(), true).unwrap();
//! assert_eq!(result.len(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// `std`/`alloc` facade so the crate body can be written once and work under either feature,
/// the same way the teacher crate's own `lib` module lets its combinators stay `no_std`-portable.
/// `ResultTuple`/`ParseError` inherently need heap allocation (a growable `Vec` of captures, a
/// growable `Vec` of expectation strings), so unlike the teacher this crate does not offer a
/// bare-`core` mode without `alloc` — only `std` vs. `no_std`+`alloc`.
pub(crate) mod lib {
    pub use alloc::format;
    pub use alloc::string::{String, ToString};
    pub use alloc::vec;
    pub use alloc::vec::Vec;
}

pub mod combinator;
pub mod compile;
pub mod driver;
pub mod error;
pub mod rule;
pub mod trace;
pub mod util;
pub mod value;

#[cfg(feature = "demo")]
pub mod json_demo;

pub mod grammar;

/// Re-exports for the common case: building a grammar and running [`parse`][driver::parse].
pub mod prelude {
    pub use crate::compile::RuleExpr;
    pub use crate::driver::parse;
    pub use crate::error::{Error, ParseError, RuleError};
    pub use crate::grammar::{rule, Grammar};
    pub use crate::rule::{Char, Rule, RuleResult};
    pub use crate::value::{ResultTuple, Value};
}
