//! Header resolution: which header positions feed which selected columns.

use crate::tokenizer::split;
use crate::types::ColumnIndex;

/// Build a [`ColumnIndex`] from a header line and the raw selected-columns list.
///
/// A header name is recorded when it occurs *anywhere* inside `wanted_csv` (substring
/// containment, not an exact field match), so a short header name such as `col` also resolves
/// when only `col1` was asked for. Selected names that are not in the header get no entry.
/// Duplicate header names keep their first position.
pub fn resolve(header_line: &str, wanted_csv: &str) -> ColumnIndex {
    let mut index = ColumnIndex::new();
    for (position, name) in split(header_line, ',').into_iter().enumerate() {
        if wanted_csv.contains(name) {
            index.insert(name, position);
        }
    }
    index
}

/// Parse the selected-columns list into output column order.
///
/// Empty names are dropped and repeated names keep their first occurrence.
pub fn selected_columns(wanted_csv: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for name in split(wanted_csv, ',') {
        if name.is_empty() || out.iter().any(|c| c == name) {
            continue;
        }
        out.push(name.to_owned());
    }
    out
}
