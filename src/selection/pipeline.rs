//! End-to-end selection: read rows, project the selected columns, run the filter block.
//!
//! Most callers use [`select_from_path`] or [`select_from_str`] and then
//! [`Selection::write_to`]. A [`SelectionRequest`] bundles the three inputs so a run can be
//! described by a JSON job file.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{SelectError, SelectResult};
use crate::predicate;
use crate::projection::{MalformedRowPolicy, TableBuilder};
use crate::report::write_table;
use crate::tokenizer::split_lines;
use crate::types::Table;

use super::observability::{
    severity_for_error, SelectionContext, SelectionObserver, SelectionStats, Severity,
};

/// Options controlling a selection run.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct SelectOptions {
    /// What to do with data lines that are too short for the selected columns.
    pub malformed_rows: MalformedRowPolicy,
    /// Optional observer for issues/alerts.
    pub observer: Option<Arc<dyn SelectionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: Severity,
}

impl fmt::Debug for SelectOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectOptions")
            .field("malformed_rows", &self.malformed_rows)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            malformed_rows: MalformedRowPolicy::default(),
            observer: None,
            alert_at_or_above: Severity::Critical,
        }
    }
}

/// Result of a selection run.
#[derive(Debug)]
pub struct Selection {
    /// Projected and filtered rows.
    pub table: Table,
    /// Recoverable issues in the order they were found: unknown selected columns and
    /// malformed rows first, then filter-line issues.
    pub issues: Vec<SelectError>,
    pub stats: SelectionStats,
}

impl Selection {
    /// Write the header and surviving rows to `sink` (nothing if no rows survived).
    pub fn write_to<W: Write>(&self, sink: W) -> SelectResult<usize> {
        write_table(&self.table, sink)
    }
}

/// Select columns and filter rows from in-memory CSV text.
///
/// ```rust
/// use csv_select::selection::{select_from_str, SelectOptions};
///
/// let csv = "col1,col2,col3\nx,y,1\nx,y,2\nz,w,3\n";
/// let sel = select_from_str(csv, "col1,col3", "col3>1", &SelectOptions::default()).unwrap();
///
/// let mut out = Vec::new();
/// sel.write_to(&mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "col1,col3\nx,2\nz,3\n");
/// ```
pub fn select_from_str(
    csv: &str,
    columns: &str,
    filters: &str,
    options: &SelectOptions,
) -> SelectResult<Selection> {
    let ctx = SelectionContext {
        source: "<memory>".to_string(),
        columns: columns.to_owned(),
    };
    let lines = split_lines(csv).into_iter().map(Ok::<_, SelectError>);
    observe(&ctx, options, select_lines(lines, columns, filters, options))
}

/// Select columns and filter rows from a buffered reader (e.g. stdin).
///
/// `source` names the reader in the [`SelectionContext`] handed to observers.
pub fn select_from_reader<R: BufRead>(
    reader: R,
    source: &str,
    columns: &str,
    filters: &str,
    options: &SelectOptions,
) -> SelectResult<Selection> {
    let ctx = SelectionContext {
        source: source.to_owned(),
        columns: columns.to_owned(),
    };
    observe(&ctx, options, select_buffered(reader, columns, filters, options))
}

/// Select columns and filter rows from a CSV file.
///
/// A file that cannot be opened is a fatal [`SelectError::Io`].
pub fn select_from_path(
    path: impl AsRef<Path>,
    columns: &str,
    filters: &str,
    options: &SelectOptions,
) -> SelectResult<Selection> {
    let path = path.as_ref();
    let ctx = SelectionContext {
        source: path.display().to_string(),
        columns: columns.to_owned(),
    };
    let result = File::open(path)
        .map_err(SelectError::from)
        .and_then(|f| select_buffered(BufReader::new(f), columns, filters, options));
    observe(&ctx, options, result)
}

fn select_buffered<R: BufRead>(
    reader: R,
    columns: &str,
    filters: &str,
    options: &SelectOptions,
) -> SelectResult<Selection> {
    // Raw bytes so that a line with invalid UTF-8 stays a row-level issue.
    let lines = reader.split(b'\n').map(|l| {
        let mut bytes = l?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        Ok::<_, SelectError>(bytes)
    });
    select_lines(lines, columns, filters, options)
}

fn select_lines<I, S>(
    mut lines: I,
    columns: &str,
    filters: &str,
    options: &SelectOptions,
) -> SelectResult<Selection>
where
    I: Iterator<Item = SelectResult<S>>,
    S: AsRef<[u8]>,
{
    let header = lines.next().transpose()?;
    let header = header
        .as_ref()
        .map(|h| String::from_utf8_lossy(h.as_ref()))
        .unwrap_or_default();

    let mut builder = TableBuilder::new(&header, columns, options.malformed_rows);
    for (idx0, line) in lines.enumerate() {
        // 1-based, and the header is line 1.
        let line_no = idx0 + 2;
        let line = line?;
        match std::str::from_utf8(line.as_ref()) {
            Ok(text) => builder.push_line(line_no, text)?,
            Err(_) => builder.push_undecodable(line_no, line.as_ref())?,
        }
    }
    let (mut table, mut issues) = builder.finish();
    let rows_projected = table.row_count();

    let report = predicate::run(&mut table, filters);
    issues.extend(report.issues);

    let stats = SelectionStats {
        rows_projected,
        rows_selected: table.row_count(),
        predicates_applied: report.applied.len(),
        issues: issues.len(),
    };
    log::info!(
        "selected {} of {} rows ({} filters, {} issues)",
        stats.rows_selected,
        stats.rows_projected,
        stats.predicates_applied,
        stats.issues
    );

    Ok(Selection {
        table,
        issues,
        stats,
    })
}

fn observe(
    ctx: &SelectionContext,
    options: &SelectOptions,
    result: SelectResult<Selection>,
) -> SelectResult<Selection> {
    let Some(obs) = options.observer.as_ref() else {
        return result;
    };

    match &result {
        Ok(sel) => {
            for issue in &sel.issues {
                let sev = severity_for_error(issue);
                obs.on_issue(ctx, sev, issue);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(ctx, sev, issue);
                }
            }
            obs.on_success(ctx, sel.stats);
        }
        Err(e) => {
            let sev = severity_for_error(e);
            obs.on_failure(ctx, sev, e);
            if sev >= options.alert_at_or_above {
                obs.on_alert(ctx, sev, e);
            }
        }
    }

    result
}

/// A list given either as one delimited string or as separate items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextList {
    /// Already delimited (`"a,b"` for columns, `"a=1\nb=2"` for filters).
    Joined(String),
    /// One entry per item.
    Items(Vec<String>),
}

impl TextList {
    /// Join into a single string using `delimiter` between items.
    pub fn join(&self, delimiter: &str) -> String {
        match self {
            TextList::Joined(s) => s.clone(),
            TextList::Items(items) => items.join(delimiter),
        }
    }

    fn is_blank(&self) -> bool {
        match self {
            TextList::Joined(s) => s.trim().is_empty(),
            TextList::Items(items) => items.iter().all(|s| s.trim().is_empty()),
        }
    }
}

impl Default for TextList {
    fn default() -> Self {
        TextList::Joined(String::new())
    }
}

/// Owned description of a selection run, loadable from JSON.
///
/// ```json
/// {
///   "input": "data.csv",
///   "columns": ["col1", "col4", "col3", "col5"],
///   "filters": ["col3!=l3c3"],
///   "malformed_rows": "skip"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRequest {
    /// Path to the CSV input.
    pub input: PathBuf,
    /// Selected columns, in output order.
    pub columns: TextList,
    /// Filter expressions (newline-separated when given as one string).
    #[serde(default)]
    pub filters: TextList,
    /// Overrides [`SelectOptions::malformed_rows`] when set.
    #[serde(default)]
    pub malformed_rows: Option<MalformedRowPolicy>,
}

impl SelectionRequest {
    /// Parse a request from JSON text.
    pub fn from_json_str(json: &str) -> SelectResult<Self> {
        let req: Self = serde_json::from_str(json)?;
        req.validate()?;
        Ok(req)
    }

    /// Read and parse a JSON job file.
    pub fn from_json_path(path: impl AsRef<Path>) -> SelectResult<Self> {
        let file = File::open(path)?;
        let req: Self = serde_json::from_reader(BufReader::new(file))?;
        req.validate()?;
        Ok(req)
    }

    /// Reject requests that cannot select anything.
    pub fn validate(&self) -> SelectResult<()> {
        if self.columns.is_blank() {
            return Err(SelectError::Config {
                message: "no columns selected".to_string(),
            });
        }
        Ok(())
    }

    /// Selected columns as a comma-separated list.
    pub fn columns_csv(&self) -> String {
        self.columns.join(",")
    }

    /// Filters as a newline-separated block.
    pub fn filter_block(&self) -> String {
        self.filters.join("\n")
    }

    /// Execute the request by calling [`select_from_path`].
    pub fn run(&self, options: &SelectOptions) -> SelectResult<Selection> {
        let mut opts = options.clone();
        if let Some(policy) = self.malformed_rows {
            opts.malformed_rows = policy;
        }
        select_from_path(&self.input, &self.columns_csv(), &self.filter_block(), &opts)
    }
}
