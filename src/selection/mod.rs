//! Selection entrypoints: the full read -> project -> filter pass.
//!
//! Most callers should use [`select_from_path`] (or [`select_from_str`] for in-memory text),
//! which:
//!
//! - resolves the selected columns against the header line
//! - projects every data line into a [`crate::types::Row`]
//! - runs the filter-definition block over the resulting [`crate::types::Table`]
//! - optionally reports issues/success/alerts to a [`SelectionObserver`]
//!
//! Recoverable issues never abort a run; they are returned in [`Selection::issues`].

pub mod observability;
pub mod pipeline;

pub use observability::{
    severity_for_error, CompositeObserver, SelectionContext, SelectionObserver, SelectionStats, Severity,
};
pub use pipeline::{
    select_from_path, select_from_reader, select_from_str, SelectOptions, Selection, SelectionRequest, TextList,
};
