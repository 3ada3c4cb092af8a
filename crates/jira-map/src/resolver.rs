//! Mapping resolver implementation.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use jira_model::{ColumnBinding, TargetField};

/// Owns one [`ColumnBinding`] per CSV header column and keeps every
/// binding's selection and choice set mutually consistent.
///
/// Invariant: at quiescence no two bindings select the same non-`skip`
/// field. Selection changes are applied, then one full recompute pass
/// settles the whole set before control returns to the caller; there are
/// no observer callbacks, so nothing can re-enter mid-recompute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingResolver {
    bindings: Vec<ColumnBinding>,
}

impl MappingResolver {
    /// Builds one binding per header column and settles the choice sets.
    ///
    /// A header whose name is a case-insensitive exact match for a field
    /// name pre-selects that field, unless the field is `skip` or an
    /// earlier column already claimed it; earlier columns win ties, the
    /// only tie-break rule. Everything else defaults to `skip`.
    pub fn initialize(header: &[String]) -> Self {
        let mut claimed = BTreeSet::new();
        let mut bindings = Vec::with_capacity(header.len());
        for name in header {
            let selected = match TargetField::matching(name) {
                Some(field) if !field.is_skip() && claimed.insert(field) => field,
                _ => TargetField::Skip,
            };
            bindings.push(ColumnBinding::new(name.clone(), selected));
        }
        let mut resolver = Self { bindings };
        resolver.recompute();
        debug!(
            column_count = resolver.bindings.len(),
            bound_count = resolver.bound_count(),
            "resolver initialized"
        );
        resolver
    }

    /// All bindings, in header order.
    pub fn bindings(&self) -> &[ColumnBinding] {
        &self.bindings
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True when the header had no columns.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Number of columns bound to something other than `skip`.
    pub fn bound_count(&self) -> usize {
        self.bindings.iter().filter(|b| !b.is_skipped()).count()
    }

    /// Sets a column's selection and settles the system.
    ///
    /// Only fields in the column's current choice set are accepted; a
    /// field another column has taken is not offered and is ignored here,
    /// exactly as the dropdown this models would not show it. Out-of-range
    /// columns are ignored too; selection edits are pure state transitions
    /// and never surface errors.
    pub fn set_selection(&mut self, column: usize, field: TargetField) {
        let Some(binding) = self.bindings.get_mut(column) else {
            debug!(column, field = %field, "selection for unknown column ignored");
            return;
        };
        if !binding.choices.contains(&field) {
            debug!(
                column,
                field = %field,
                header = %binding.source_header,
                "selection not currently legal, ignored"
            );
            return;
        }
        trace!(column, field = %field, header = %binding.source_header, "selection");
        binding.selected = field;
        self.recompute();
    }

    /// Recomputes every binding's choice set from the current selections.
    ///
    /// A binding's choices are `skip`, its own current selection, and every
    /// field no other binding has taken, in canonical field order. Choice
    /// lists are replaced only when they actually differ. A selection that
    /// fell out of its own choices (cannot happen under this construction,
    /// handled defensively) resets to `skip`, which frees the field and
    /// triggers another settle pass; the loop is bounded because every
    /// reset strictly shrinks the set of non-`skip` selections.
    pub fn recompute(&mut self) {
        loop {
            let taken: BTreeSet<TargetField> = self
                .bindings
                .iter()
                .map(|binding| binding.selected)
                .filter(|field| !field.is_skip())
                .collect();
            let mut selection_changed = false;
            for binding in &mut self.bindings {
                let current = binding.selected;
                let choices: Vec<TargetField> = TargetField::ALL
                    .into_iter()
                    .filter(|field| {
                        field.is_skip() || *field == current || !taken.contains(field)
                    })
                    .collect();
                if binding.choices != choices {
                    binding.choices = choices;
                }
                if !binding.choices.contains(&binding.selected) {
                    binding.selected = TargetField::Skip;
                    selection_changed = true;
                }
            }
            if !selection_changed {
                return;
            }
        }
    }

    /// Index of the first column bound to `field`, in header order.
    ///
    /// The invariant forbids duplicate non-`skip` selections, but if a
    /// pathological state ever held one anyway the first match wins.
    pub fn field_column_index(&self, field: TargetField) -> Option<usize> {
        self.bindings
            .iter()
            .position(|binding| binding.selected == field)
    }

    /// Index of the first column whose header matches `name`,
    /// case-insensitively.
    pub fn column_index_by_header(&self, name: &str) -> Option<usize> {
        let trimmed = name.trim();
        self.bindings
            .iter()
            .position(|binding| binding.source_header.eq_ignore_ascii_case(trimmed))
    }
}
