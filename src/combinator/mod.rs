//! The combinator algebra: one module per primitive from the rule-composition layer.
//!
//! Every module exposes a free function returning a [`RuleExpr`][crate::compile::RuleExpr] ready
//! to be nested inside a [`Seq`][seq::Seq]/[`Or`][or::Or] or handed to
//! [`parse`][crate::driver::parse] directly, plus the [`Rule`][crate::rule::Rule] struct that
//! does the work.

pub mod discard;
pub mod eof;
pub mod literal;
pub mod opt;
pub mod or;
pub mod range;
pub mod repeat;
pub mod seq;
