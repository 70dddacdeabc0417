//! Rendering a [`Table`] as delimiter-joined text.
//!
//! Output is one header line followed by one line per row. Fields are joined with `,` and
//! written verbatim: nothing is quoted or escaped, and lines have no trailing delimiter.
//! An empty table, or one where no selected column resolved, produces no output at all.

use std::io::{BufWriter, Write};

use crate::error::SelectResult;
use crate::types::{Row, Table};

/// Header names for `table`, in [`Row`] iteration order.
///
/// Taken from the first row, so an empty table has no header.
pub fn header_names(table: &Table) -> Vec<&str> {
    table
        .rows
        .first()
        .map(|row| row.columns().collect())
        .unwrap_or_default()
}

/// A single row as one comma-joined line (without a line terminator).
pub fn render_row(row: &Row) -> String {
    row.values().collect::<Vec<_>>().join(",")
}

/// Write `table` to `sink`. Returns the number of data rows written.
///
/// A table without rows, or whose rows have no columns left, writes nothing.
pub fn write_table<W: Write>(table: &Table, sink: W) -> SelectResult<usize> {
    let header = header_names(table);
    if header.is_empty() {
        return Ok(0);
    }

    let mut out = BufWriter::new(sink);
    writeln!(out, "{}", header.join(","))?;
    for row in &table.rows {
        writeln!(out, "{}", render_row(row))?;
    }
    out.flush()?;

    Ok(table.row_count())
}

/// Render `table` into a `String` (see [`write_table`]).
pub fn render_table(table: &Table) -> SelectResult<String> {
    let mut buf = Vec::new();
    write_table(table, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
