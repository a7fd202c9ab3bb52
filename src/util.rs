//! Small utilities layered on top of the core, supplementing what the Python original shipped
//! in `pegasus/util.py` (spec §14.3).

use crate::lib::Vec;
use crate::value::{ResultTuple, Value};

/// Recursively unwraps nested [`Value::Tuple`] nodes into a single flat sequence.
///
/// Directly grounded in `pegasus/util.py:flatten`'s recursive unwrapping of nested
/// `tuple`/`list` values. This is what turns [`Plus`][crate::combinator::repeat::plus]'s nested
/// per-iteration captures into the flat tuple shown in spec §8 scenario 2.
pub fn flatten(value: Value) -> Vec<Value> {
    match value {
        Value::Tuple(tuple) => flatten_tuple(tuple),
        other => crate::lib::vec![other],
    }
}

/// Applies [`flatten`] to every value in `tuple` and concatenates the results.
pub fn flatten_tuple(tuple: ResultTuple) -> Vec<Value> {
    let mut out = Vec::new();
    for value in tuple {
        out.extend(flatten(value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_one_level_of_nesting() {
        let nested = crate::lib::vec![
            Value::Tuple(crate::lib::vec![Value::Char('a')]),
            Value::Tuple(crate::lib::vec![Value::Char('b')]),
        ];
        assert_eq!(
            flatten_tuple(nested),
            crate::lib::vec![Value::Char('a'), Value::Char('b')]
        );
    }

    #[test]
    fn flattens_nested_tuples_recursively() {
        let nested = crate::lib::vec![Value::Tuple(crate::lib::vec![Value::Tuple(
            crate::lib::vec![Value::Char('x')]
        )])];
        assert_eq!(flatten_tuple(nested), crate::lib::vec![Value::Char('x')]);
    }

    #[test]
    fn leaves_non_tuple_values_untouched() {
        let tuple = crate::lib::vec![Value::Char('a'), Value::Literal(crate::lib::String::from("hi"))];
        assert_eq!(flatten_tuple(tuple.clone()), tuple);
    }
}
