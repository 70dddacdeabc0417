//! Ordinal string comparison.
//!
//! All filter comparisons are byte-wise and locale-independent: `"9" > "10"` and
//! `"Z" < "a"`. Numeric-looking values are never parsed.

use std::cmp::Ordering;

use crate::types::{CompareOp, Predicate};

/// Three-way ordinal comparison over the raw UTF-8 bytes of `a` and `b`.
///
/// The first differing byte decides; if one value is a prefix of the other, the shorter one
/// orders first.
pub fn ordinal_cmp(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    for (x, y) in a.iter().zip(b.iter()) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            decided => return decided,
        }
    }
    a.len().cmp(&b.len())
}

impl CompareOp {
    /// Returns `true` if `ordering` (cell value compared to the literal) satisfies the operator.
    pub fn holds(self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::Ne => ordering != Ordering::Equal,
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::Le => ordering != Ordering::Greater,
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::Ge => ordering != Ordering::Less,
        }
    }
}

/// Returns `true` if `cell` satisfies `predicate`.
pub fn evaluate(predicate: &Predicate, cell: &str) -> bool {
    predicate.op.holds(ordinal_cmp(cell, &predicate.value))
}
