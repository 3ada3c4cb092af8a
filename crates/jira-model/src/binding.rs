//! Column binding types for the interactive mapping workflow.

use crate::fields::TargetField;

/// One CSV header column and the ticket field it currently feeds.
///
/// Bindings are rebuilt wholesale every time a file is (re)loaded; the
/// header name never changes for the lifetime of a load, while the
/// selection and the legal choice set do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnBinding {
    /// Header name as read from the CSV.
    pub source_header: String,
    /// Field this column currently feeds.
    pub selected: TargetField,
    /// Fields currently legal for this column, in canonical order.
    /// Recomputed after every selection change, never persisted.
    pub choices: Vec<TargetField>,
}

impl ColumnBinding {
    /// Creates a binding with the given selection and no choices yet.
    pub fn new(source_header: impl Into<String>, selected: TargetField) -> Self {
        Self {
            source_header: source_header.into(),
            selected,
            choices: Vec::new(),
        }
    }

    /// Returns true if this column feeds no ticket field.
    pub fn is_skipped(&self) -> bool {
        self.selected.is_skip()
    }
}
