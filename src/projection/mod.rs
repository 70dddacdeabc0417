//! Column resolution and row projection.
//!
//! - [`resolve`]: header line + selected-columns list -> [`crate::types::ColumnIndex`]
//! - [`project`]: raw data line -> [`crate::types::Row`] with only the selected columns
//! - [`TableBuilder`]: header + data lines -> [`crate::types::Table`], applying a
//!   [`MalformedRowPolicy`] to short lines
//!
//! ```rust
//! use csv_select::projection::{MalformedRowPolicy, TableBuilder};
//!
//! let mut builder = TableBuilder::new("col1,col2,col3", "col1,col3", MalformedRowPolicy::Skip);
//! builder.push_line(2, "x,y,1").unwrap();
//! builder.push_line(3, "z,w,3").unwrap();
//! let (table, issues) = builder.finish();
//!
//! assert!(issues.is_empty());
//! assert_eq!(table.columns, vec!["col1", "col3"]);
//! assert_eq!(table.rows[1].get("col3"), Some("3"));
//! ```

pub mod projector;
pub mod resolver;

pub use projector::{project, project_padded, MalformedRowPolicy, TableBuilder};
pub use resolver::{resolve, selected_columns};
