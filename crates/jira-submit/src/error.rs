//! Error types for submission runs.

use std::fmt;

use thiserror::Error;

use jira_model::TargetField;

/// Errors that stop a run before any row is processed.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// One or more fields required by the chosen variant have no bound
    /// column. Enumerates every unresolved field, not just the first.
    #[error("no column mapped for required field(s): {}", join_fields(.0))]
    MissingMappings(Vec<TargetField>),
}

fn join_fields(fields: &[TargetField]) -> String {
    let names: Vec<&str> = fields.iter().map(TargetField::as_str).collect();
    names.join(", ")
}

/// A ticket-creation call that failed mid-run.
///
/// Carries the zero-based data-row index and the client's message; rows
/// committed before this one stay committed.
#[derive(Debug)]
pub struct RowFailure {
    /// Zero-based index into the data rows (header excluded).
    pub row: usize,
    /// Underlying client error.
    pub error: anyhow::Error,
}

impl fmt::Display for RowFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.row + 1, self.error)
    }
}
