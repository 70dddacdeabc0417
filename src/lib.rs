//! `csv-select` picks a subset of columns out of simple comma-separated text and keeps only the
//! rows that satisfy a block of comparison filters such as `col3!=l3c3` or `col1>=5`.
//!
//! The primary entrypoints are [`selection::select_from_path`] and
//! [`selection::select_from_str`], which run the whole pass and return a
//! [`selection::Selection`] that can be written out with [`selection::Selection::write_to`].
//!
//! ## Inputs
//!
//! - **Data**: first line is the header, every following line is a data row. Fields are split
//!   on `,` with no quoting or escaping.
//! - **Selected columns**: a comma-separated list of header names; its order is the output
//!   column order.
//! - **Filter block**: newline-separated expressions `<column><op><value>` with `op` one of
//!   `!=`, `>=`, `<=`, `>`, `<`, `=`. Filters combine with logical AND; an empty block keeps
//!   every row.
//!
//! ## Comparison semantics
//!
//! Every comparison is an ordinal (byte-wise) string comparison. Values are never parsed as
//! numbers, so `"9" > "10"` holds.
//!
//! ## Quick example
//!
//! ```rust
//! use csv_select::selection::{select_from_str, SelectOptions};
//!
//! # fn main() -> Result<(), csv_select::SelectError> {
//! let csv = "col1,col2,col3\nx,y,1\nx,y,2\nz,w,3\n";
//! let sel = select_from_str(csv, "col1,col3", "col3!=2", &SelectOptions::default())?;
//!
//! let mut out = Vec::new();
//! sel.write_to(&mut out)?;
//! assert_eq!(String::from_utf8(out).unwrap(), "col1,col3\nx,1\nz,3\n");
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Problems with a single filter line or data line do not stop the run; they are collected in
//! [`selection::Selection::issues`] and logged through the `log` facade:
//!
//! - [`SelectError::Parse`]: the filter line has no recognised operator (the line is skipped)
//! - [`SelectError::MissingColumn`]: the filter references a column that was not selected
//!   (rows that cannot be evaluated are filtered out)
//! - [`SelectError::UnknownColumn`]: a selected column is not in the header
//! - [`SelectError::MalformedRow`]: a data line is too short (see
//!   [`projection::MalformedRowPolicy`])
//! - [`SelectError::InvalidEncoding`]: a data line read from a file or reader is not valid
//!   UTF-8 (handled by the same policy)
//!
//! A missing input file is returned as [`SelectError::Io`].
//!
//! ## Modules
//!
//! - [`selection`]: end-to-end entrypoints, options, observers and job files
//! - [`predicate`]: filter parsing, ordinal comparison and row filtering
//! - [`projection`]: header resolution and row projection
//! - [`report`]: rendering a table back to text
//! - [`tokenizer`]: single-character field splitting
//! - [`types`]: rows, tables, column index and predicates
//! - [`error`]: the error type shared by all of the above

pub mod error;
pub mod predicate;
pub mod projection;
pub mod report;
pub mod selection;
pub mod tokenizer;
pub mod types;

pub use error::{SelectError, SelectResult};
