//! Filter-expression parsing: `<column><op><value>` -> [`Predicate`].

use std::str::FromStr;

use crate::error::{SelectError, SelectResult};
use crate::types::{CompareOp, Predicate};

/// Operator dispatch table, most specific first.
///
/// Two-character operators must come before their one-character prefixes so that `a>=5`
/// never reads as `a > "=5"`.
const OPERATORS: [CompareOp; 6] = [
    CompareOp::Ne,
    CompareOp::Ge,
    CompareOp::Le,
    CompareOp::Gt,
    CompareOp::Lt,
    CompareOp::Eq,
];

/// Parse a single filter expression.
///
/// The operator is the first position in `expression` where any operator starts; at that
/// position the table above picks the longest match. Everything before it is the column name
/// and everything after it is the literal comparison value (which may be empty and may itself
/// contain operator characters). No whitespace is trimmed.
///
/// ```rust
/// use csv_select::predicate::parse;
/// use csv_select::types::CompareOp;
///
/// let p = parse("age>=30").unwrap();
/// assert_eq!((p.column.as_str(), p.op, p.value.as_str()), ("age", CompareOp::Ge, "30"));
/// ```
pub fn parse(expression: &str) -> SelectResult<Predicate> {
    let (pos, op) = locate_operator(expression).ok_or_else(|| SelectError::Parse {
        filter: expression.to_owned(),
        message: "no comparison operator (expected one of !=, >=, <=, >, <, =)".to_string(),
    })?;

    let column = &expression[..pos];
    if column.is_empty() {
        return Err(SelectError::Parse {
            filter: expression.to_owned(),
            message: "missing column name before operator".to_string(),
        });
    }
    let value = &expression[pos + op.as_str().len()..];

    Ok(Predicate::new(column, op, value))
}

fn locate_operator(expression: &str) -> Option<(usize, CompareOp)> {
    expression.char_indices().find_map(|(pos, _)| {
        let rest = &expression[pos..];
        OPERATORS
            .iter()
            .find(|op| rest.starts_with(op.as_str()))
            .map(|op| (pos, *op))
    })
}

impl FromStr for Predicate {
    type Err = SelectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
