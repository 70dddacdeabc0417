//! Applying predicates to a [`Table`].

use crate::error::{SelectError, SelectResult};
use crate::tokenizer::split_lines;
use crate::types::{Predicate, Table};

use super::compare::evaluate;
use super::parse::parse;

/// Outcome of running a filter-definition block over a table.
#[derive(Debug, Default)]
pub struct FilterReport {
    /// Predicates that were parsed and applied, in block order.
    pub applied: Vec<Predicate>,
    /// Total rows removed across all predicates.
    pub rows_removed: usize,
    /// One entry per filter line that failed to parse or referenced a missing column.
    pub issues: Vec<SelectError>,
}

impl FilterReport {
    /// Returns `true` if every non-empty filter line was applied cleanly.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Remove every row of `table` that does not satisfy `predicate`.
///
/// Returns the number of rows removed. Surviving rows keep their relative order.
///
/// Rows that do not have the predicate's column are removed as well, and the call then returns
/// a single [`SelectError::MissingColumn`] for the whole table. The table is left in its
/// filtered state in both cases.
pub fn apply(table: &mut Table, predicate: &Predicate) -> SelectResult<usize> {
    let before = table.rows.len();
    let mut unresolved = 0usize;

    table.rows.retain(|row| match row.get(&predicate.column) {
        Some(cell) => evaluate(predicate, cell),
        None => {
            unresolved += 1;
            false
        }
    });

    let removed = before - table.rows.len();
    if unresolved > 0 || (before == 0 && !table.has_column(&predicate.column)) {
        return Err(SelectError::MissingColumn {
            column: predicate.column.clone(),
            filter: predicate.to_string(),
        });
    }

    log::debug!("filter '{predicate}' removed {removed} of {before} rows");
    Ok(removed)
}

/// Iterate the filter expressions of a newline-separated block, skipping blank lines.
pub fn filter_lines(filter_block: &str) -> impl Iterator<Item = &str> {
    split_lines(filter_block)
        .into_iter()
        .filter(|line| !line.trim().is_empty())
}

/// Parse and apply every filter line of `filter_block`, in order.
///
/// Filters combine with logical AND: each predicate only sees rows that survived the previous
/// ones. A line that fails to parse is reported and skipped; a line whose column is missing is
/// reported once and filters out the rows it could not evaluate. Neither stops the run.
pub fn run(table: &mut Table, filter_block: &str) -> FilterReport {
    let mut report = FilterReport::default();

    for line in filter_lines(filter_block) {
        let predicate = match parse(line) {
            Ok(p) => p,
            Err(err) => {
                log::warn!("{err}; filter skipped");
                report.issues.push(err);
                continue;
            }
        };

        let before = table.rows.len();
        if let Err(err) = apply(table, &predicate) {
            log::warn!("{err}; unresolved rows filtered out");
            report.issues.push(err);
        }
        report.rows_removed += before - table.rows.len();
        report.applied.push(predicate);
    }

    report
}
