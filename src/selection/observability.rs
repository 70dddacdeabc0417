use std::fmt;
use std::sync::Arc;

use crate::error::SelectError;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational event.
    Info,
    /// Recoverable issue affecting one row or one filter line.
    Warning,
    /// The selection failed (bad options, bad job file, aborted on a malformed row).
    Error,
    /// I/O failure.
    Critical,
}

/// Severity for a given error.
pub fn severity_for_error(e: &SelectError) -> Severity {
    match e {
        SelectError::Io(_) => Severity::Critical,
        SelectError::Json(_) | SelectError::Config { .. } => Severity::Error,
        SelectError::Parse { .. }
        | SelectError::MissingColumn { .. }
        | SelectError::UnknownColumn { .. }
        | SelectError::MalformedRow { .. }
        | SelectError::InvalidEncoding { .. } => Severity::Warning,
    }
}

/// Context about a selection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionContext {
    /// Where the rows came from: a file path, `<memory>`, or the label given to
    /// `select_from_reader`.
    pub source: String,
    /// The raw selected-columns list.
    pub columns: String,
}

/// Counters reported when a selection finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionStats {
    /// Rows produced by projection, before filtering.
    pub rows_projected: usize,
    /// Rows that survived every filter.
    pub rows_selected: usize,
    /// Filter lines that parsed and were applied.
    pub predicates_applied: usize,
    /// Recoverable issues (parse, missing column, malformed row, invalid encoding).
    pub issues: usize,
}

/// Observer interface for selection outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait SelectionObserver: Send + Sync {
    /// Called when a selection completes (possibly with recoverable issues).
    fn on_success(&self, _ctx: &SelectionContext, _stats: SelectionStats) {}

    /// Called once per recoverable issue.
    fn on_issue(&self, _ctx: &SelectionContext, _severity: Severity, _error: &SelectError) {}

    /// Called when the selection fails.
    fn on_failure(&self, _ctx: &SelectionContext, _severity: Severity, _error: &SelectError) {}

    /// Called when an issue or failure meets the alert threshold.
    ///
    /// Default behavior does nothing; the event has already been delivered to
    /// [`Self::on_issue`] or [`Self::on_failure`].
    fn on_alert(&self, _ctx: &SelectionContext, _severity: Severity, _error: &SelectError) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn SelectionObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn SelectionObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl SelectionObserver for CompositeObserver {
    fn on_success(&self, ctx: &SelectionContext, stats: SelectionStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_issue(&self, ctx: &SelectionContext, severity: Severity, error: &SelectError) {
        for o in &self.observers {
            o.on_issue(ctx, severity, error);
        }
    }

    fn on_failure(&self, ctx: &SelectionContext, severity: Severity, error: &SelectError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &SelectionContext, severity: Severity, error: &SelectError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}
