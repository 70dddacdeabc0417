//! Row projection: raw data lines -> [`Row`]s holding only the selected columns.

use serde::{Deserialize, Serialize};

use crate::error::{SelectError, SelectResult};
use crate::tokenizer::split;
use crate::types::{ColumnIndex, Row, Table};

use super::resolver::{resolve, selected_columns};

/// What to do with a data line that has fewer cells than a selected column needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MalformedRowPolicy {
    /// Drop the line and report it (default).
    #[default]
    Skip,
    /// Stop building the table and return the error.
    Abort,
    /// Keep the line, using an empty value for every missing cell, and report it.
    FillEmpty,
}

/// Project one raw data line into a [`Row`].
///
/// For every name in `wanted` that has a position in `index`, the cell at that position is
/// copied into the row under that name. Names without a position are left out of the row.
///
/// Returns [`SelectError::MalformedRow`] (tagged with `line`) if a recorded position is past
/// the end of the line.
pub fn project(raw_line: &str, index: &ColumnIndex, wanted: &[String], line: usize) -> SelectResult<Row> {
    let cells = split(raw_line, ',');
    let mut row = Row::new();
    for column in wanted {
        let Some(pos) = index.position(column) else {
            continue;
        };
        match cells.get(pos) {
            Some(value) => row.insert(column.as_str(), *value),
            None => {
                return Err(SelectError::MalformedRow {
                    line,
                    required: pos + 1,
                    found: cells.len(),
                });
            }
        }
    }
    Ok(row)
}

/// Like [`project`], but missing cells become empty values instead of an error.
pub fn project_padded(raw_line: &str, index: &ColumnIndex, wanted: &[String]) -> Row {
    let cells = split(raw_line, ',');
    wanted
        .iter()
        .filter_map(|column| {
            let pos = index.position(column)?;
            Some((column.as_str(), cells.get(pos).copied().unwrap_or("")))
        })
        .collect()
}

/// Incrementally builds a [`Table`] from a header line followed by data lines.
#[derive(Debug)]
pub struct TableBuilder {
    index: ColumnIndex,
    wanted: Vec<String>,
    policy: MalformedRowPolicy,
    table: Table,
    issues: Vec<SelectError>,
}

impl TableBuilder {
    /// Resolve `header_line` against `wanted_csv` and prepare an empty table.
    ///
    /// Every selected name that does not occur in the header is recorded as
    /// [`SelectError::UnknownColumn`] and left out of the table's columns.
    pub fn new(header_line: &str, wanted_csv: &str, policy: MalformedRowPolicy) -> Self {
        let index = resolve(header_line, wanted_csv);
        let wanted = selected_columns(wanted_csv);

        let mut issues = Vec::new();
        let mut columns = Vec::with_capacity(wanted.len());
        for name in &wanted {
            if index.contains(name) {
                columns.push(name.clone());
            } else {
                log::warn!("selected column '{name}' not found in header");
                issues.push(SelectError::UnknownColumn {
                    column: name.clone(),
                });
            }
        }

        Self {
            index,
            wanted,
            policy,
            table: Table::new(columns, Vec::new()),
            issues,
        }
    }

    /// Project one data line. `line` is the 1-based line number in the input (header is 1).
    ///
    /// Empty lines are ignored. Only [`MalformedRowPolicy::Abort`] turns a malformed line into
    /// an `Err`; the other policies record the issue and continue.
    pub fn push_line(&mut self, line: usize, raw_line: &str) -> SelectResult<()> {
        if raw_line.is_empty() {
            log::debug!("skipping empty line {line}");
            return Ok(());
        }

        match project(raw_line, &self.index, &self.wanted, line) {
            Ok(row) => self.table.rows.push(row),
            Err(err) => match self.policy {
                MalformedRowPolicy::Abort => return Err(err),
                MalformedRowPolicy::Skip => {
                    log::warn!("{err}; row skipped");
                    self.issues.push(err);
                }
                MalformedRowPolicy::FillEmpty => {
                    log::warn!("{err}; missing cells left empty");
                    self.issues.push(err);
                    self.table
                        .rows
                        .push(project_padded(raw_line, &self.index, &self.wanted));
                }
            },
        }
        Ok(())
    }

    /// Handle a data line whose bytes are not valid UTF-8.
    ///
    /// The line is reported as [`SelectError::InvalidEncoding`] and follows the malformed-row
    /// policy: `Skip` drops it, `Abort` returns the error, and `FillEmpty` keeps it with every
    /// invalid sequence replaced by U+FFFD.
    pub fn push_undecodable(&mut self, line: usize, raw_line: &[u8]) -> SelectResult<()> {
        let err = SelectError::InvalidEncoding { line };
        match self.policy {
            MalformedRowPolicy::Abort => Err(err),
            MalformedRowPolicy::Skip => {
                log::warn!("{err}; row skipped");
                self.issues.push(err);
                Ok(())
            }
            MalformedRowPolicy::FillEmpty => {
                log::warn!("{err}; invalid bytes replaced");
                self.issues.push(err);
                self.push_line(line, &String::from_utf8_lossy(raw_line))
            }
        }
    }

    /// Finish building, returning the table and every recoverable issue seen so far.
    pub fn finish(self) -> (Table, Vec<SelectError>) {
        (self.table, self.issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::resolve;

    fn wanted(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn projects_selected_columns_in_wanted_order() {
        let idx = resolve("col1,col2,col3", "col3,col1");
        let row = project("x,y,1", &idx, &wanted(&["col3", "col1"]), 2).unwrap();
        assert_eq!(row.columns().collect::<Vec<_>>(), vec!["col3", "col1"]);
        assert_eq!(row.get("col3"), Some("1"));
        assert_eq!(row.get("col1"), Some("x"));
        assert_eq!(row.get("col2"), None);
    }

    #[test]
    fn unresolved_columns_are_left_out() {
        let idx = resolve("col1,col2", "col1,nope");
        let row = project("a,b", &idx, &wanted(&["col1", "nope"]), 2).unwrap();
        assert_eq!(row.len(), 1);
        assert_eq!(row.get("nope"), None);
    }

    #[test]
    fn short_line_is_a_malformed_row() {
        let idx = resolve("col1,col2,col3", "col3");
        let err = project("x,y", &idx, &wanted(&["col3"]), 7).unwrap_err();
        match err {
            SelectError::MalformedRow { line, required, found } => {
                assert_eq!((line, required, found), (7, 3, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn padded_projection_fills_missing_cells() {
        let idx = resolve("col1,col2,col3", "col1,col3");
        let row = project_padded("x", &idx, &wanted(&["col1", "col3"]));
        assert_eq!(row.get("col1"), Some("x"));
        assert_eq!(row.get("col3"), Some(""));
    }

    #[test]
    fn builder_skips_malformed_rows_by_default() {
        let mut b = TableBuilder::new("a,b", "a,b", MalformedRowPolicy::default());
        b.push_line(2, "1,2").unwrap();
        b.push_line(3, "3").unwrap();
        b.push_line(4, "").unwrap();
        b.push_line(5, "5,6").unwrap();
        let (table, issues) = b.finish();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[1].get("a"), Some("5"));
        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0], SelectError::MalformedRow { line: 3, .. }));
    }

    #[test]
    fn builder_aborts_when_asked() {
        let mut b = TableBuilder::new("a,b", "b", MalformedRowPolicy::Abort);
        assert!(b.push_line(2, "1").is_err());
    }

    #[test]
    fn builder_fill_empty_keeps_row() {
        let mut b = TableBuilder::new("a,b", "a,b", MalformedRowPolicy::FillEmpty);
        b.push_line(2, "1").unwrap();
        let (table, issues) = b.finish();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows[0].get("b"), Some(""));
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn undecodable_lines_follow_the_policy() {
        let raw = b"\xff\xfe,3";

        let mut b = TableBuilder::new("a,b", "a,b", MalformedRowPolicy::Skip);
        b.push_undecodable(3, raw).unwrap();
        let (table, issues) = b.finish();
        assert!(table.is_empty());
        assert!(matches!(issues[..], [SelectError::InvalidEncoding { line: 3 }]));

        let mut b = TableBuilder::new("a,b", "a,b", MalformedRowPolicy::Abort);
        assert!(matches!(
            b.push_undecodable(3, raw),
            Err(SelectError::InvalidEncoding { line: 3 })
        ));

        let mut b = TableBuilder::new("a,b", "a,b", MalformedRowPolicy::FillEmpty);
        b.push_undecodable(3, raw).unwrap();
        let (table, issues) = b.finish();
        assert_eq!(table.rows[0].get("a"), Some("\u{fffd}\u{fffd}"));
        assert_eq!(table.rows[0].get("b"), Some("3"));
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn builder_reports_unknown_selected_columns() {
        let b = TableBuilder::new("col1,col2", "col1,col9", MalformedRowPolicy::Skip);
        let (table, issues) = b.finish();
        assert_eq!(table.columns, vec!["col1".to_string()]);
        assert!(matches!(&issues[0], SelectError::UnknownColumn { column } if column == "col9"));
    }
}
