//! Core data model types for column selection and row filtering.
//!
//! Raw lines are projected into [`Row`]s (selected columns only, keyed by column name) using a
//! [`ColumnIndex`] resolved from the header. A [`Table`] is the working result set that
//! [`Predicate`]s remove rows from.

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;

/// Mapping from header name to its zero-based position in the header line.
///
/// Names that were requested but do not occur in the header have no entry; use
/// [`ColumnIndex::position`] and handle `None` explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnIndex {
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name -> position`. If `name` is already present the first position is kept.
    pub fn insert(&mut self, name: impl Into<String>, position: usize) {
        self.positions.entry(name.into()).or_insert(position);
    }

    /// Returns the header position of `name`, if it was resolved.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Returns `true` if `name` was resolved.
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Number of resolved names.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if no names were resolved.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// A single projected data line: selected column name -> cell value.
///
/// Iteration order is the order in which columns were inserted, which the projector keeps
/// equal to the selected-columns order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: IndexMap<String, String>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cell. Re-inserting an existing column keeps its original position.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Returns the value stored under `column`, if the row has that column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Column names in iteration order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Cell values in iteration order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cells.values().map(String::as_str)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

/// The working result set: selected column names plus the rows that are still alive.
///
/// Row order is always the input order; filtering only ever removes rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Selected columns that resolved against the header, in output order.
    pub columns: Vec<String>,
    /// Surviving rows.
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a table from its columns and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Number of rows in the table.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if no rows survived.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns `true` if `column` is one of the table's projected columns.
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }
}

/// The closed set of comparison operators understood by filter expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl CompareOp {
    /// Operator text as written in a filter expression.
    pub fn as_str(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "!=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed filter expression: `<column><op><value>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Predicate {
    pub op: CompareOp,
    pub column: String,
    pub value: String,
}

impl Predicate {
    pub fn new(column: impl Into<String>, op: CompareOp, value: impl Into<String>) -> Self {
        Self {
            op,
            column: column.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.column, self.op, self.value)
    }
}
