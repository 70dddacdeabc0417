//! The predicate engine: filter-expression parsing and row filtering.
//!
//! A filter-definition block is a newline-separated list of expressions such as `col1>=5` or
//! `col3!=l3c3`. Each line becomes one [`crate::types::Predicate`]; predicates are applied in
//! order and combine with logical AND. All comparisons are ordinal string comparisons (see
//! [`compare::ordinal_cmp`]).
//!
//! ```rust
//! use csv_select::predicate::run;
//! use csv_select::types::{Row, Table};
//!
//! let mut table = Table::new(
//!     vec!["col1".into(), "col3".into()],
//!     vec![
//!         [("col1", "x"), ("col3", "1")].into_iter().collect::<Row>(),
//!         [("col1", "x"), ("col3", "2")].into_iter().collect::<Row>(),
//!         [("col1", "z"), ("col3", "3")].into_iter().collect::<Row>(),
//!     ],
//! );
//!
//! let report = run(&mut table, "col3>1");
//! assert!(report.is_clean());
//! assert_eq!(table.row_count(), 2);
//! ```

pub mod compare;
pub mod engine;
pub mod parse;

pub use compare::{evaluate, ordinal_cmp};
pub use engine::{apply, filter_lines, run, FilterReport};
pub use parse::parse;
