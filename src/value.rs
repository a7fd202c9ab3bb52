//! The captured-output model (spec §3, §10.2).
//!
//! The Python original concatenates heterogeneous, dynamically-sized tuples. Rust has no such
//! type, so a captured value is a closed [`Value`] enum and a [`ResultTuple`] is an ordered,
//! growable sequence of them. Every concatenation/emptiness/nesting rule in the spec holds over
//! `Value`/`ResultTuple` exactly as it holds over the original's tuples.

use crate::lib::{String, Vec};

/// A single captured value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A single matched character, e.g. from [`ChrRange`][crate::combinator::range].
    Char(char),
    /// A matched literal string, e.g. from [`Literal`][crate::combinator::literal].
    Literal(String),
    /// A nested capture, used by [`Plus`][crate::combinator::repeat::plus] to hold one
    /// un-flattened per-iteration [`ResultTuple`] per spec §4.8/§9.
    Tuple(ResultTuple),
}

/// The ordered, concatenable capture produced by a successful rule (spec §3).
pub type ResultTuple = Vec<Value>;
