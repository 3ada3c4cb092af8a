use jira_map::MappingResolver;
use jira_model::TargetField;

use proptest::prelude::{Strategy, prop, proptest};

fn header(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

/// Checks everything the resolver promises at quiescence.
fn assert_settled(resolver: &MappingResolver) {
    // No two bindings other than skip hold the same field.
    let mut seen = Vec::new();
    for binding in resolver.bindings() {
        if !binding.selected.is_skip() {
            assert!(
                !seen.contains(&binding.selected),
                "duplicate selection: {}",
                binding.selected
            );
            seen.push(binding.selected);
        }
    }
    for binding in resolver.bindings() {
        // Own selection and skip are always offered.
        assert!(binding.choices.contains(&TargetField::Skip));
        assert!(binding.choices.contains(&binding.selected));
        // Fields taken elsewhere are not offered.
        for field in &binding.choices {
            if !field.is_skip() && *field != binding.selected {
                assert!(!seen.contains(field), "taken field offered: {field}");
            }
        }
        // Choices follow canonical field order.
        let positions: Vec<usize> = binding
            .choices
            .iter()
            .map(|field| {
                TargetField::ALL
                    .iter()
                    .position(|candidate| candidate == field)
                    .expect("choice from vocabulary")
            })
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[test]
fn initialize_is_deterministic() {
    let names = header(&["Summary", "Desc", "component", "summary"]);
    let first = MappingResolver::initialize(&names);
    let second = MappingResolver::initialize(&names);
    assert_eq!(first, second);
    assert_settled(&first);
    // Column 3 lost the tie for "summary" to column 0.
    assert_eq!(first.bindings()[0].selected, TargetField::Summary);
    assert_eq!(first.bindings()[3].selected, TargetField::Skip);
}

#[test]
fn recompute_is_idempotent() {
    let mut resolver = MappingResolver::initialize(&header(&["Summary", "Other", "label"]));
    let settled = resolver.clone();
    resolver.recompute();
    assert_eq!(resolver, settled);
    resolver.recompute();
    assert_eq!(resolver, settled);
}

#[test]
fn freed_field_becomes_available_again() {
    let mut resolver = MappingResolver::initialize(&header(&["Summary", "Other"]));
    assert!(!resolver.bindings()[1].choices.contains(&TargetField::Summary));

    resolver.set_selection(0, TargetField::Skip);
    assert!(resolver.bindings()[1].choices.contains(&TargetField::Summary));

    resolver.set_selection(1, TargetField::Summary);
    assert_eq!(resolver.field_column_index(TargetField::Summary), Some(1));
    assert_settled(&resolver);
}

#[test]
fn taken_field_cannot_be_selected_elsewhere() {
    let mut resolver = MappingResolver::initialize(&header(&["Summary", "Other"]));
    resolver.set_selection(1, TargetField::Summary);
    // Column 0 still owns summary; column 1 keeps its previous selection.
    assert_eq!(resolver.field_column_index(TargetField::Summary), Some(0));
    assert_eq!(resolver.bindings()[1].selected, TargetField::Skip);
    assert_settled(&resolver);
}

#[test]
fn skip_may_be_shared() {
    let mut resolver = MappingResolver::initialize(&header(&["A", "B", "C"]));
    resolver.set_selection(0, TargetField::Parent);
    resolver.set_selection(0, TargetField::Skip);
    assert!(resolver.bindings().iter().all(|b| b.selected.is_skip()));
    assert_settled(&resolver);
}

#[test]
fn field_column_index_reports_first_match() {
    let resolver = MappingResolver::initialize(&header(&["estimate", "Other"]));
    assert_eq!(resolver.field_column_index(TargetField::Estimate), Some(0));
    assert_eq!(resolver.field_column_index(TargetField::Parent), None);
}

#[test]
fn column_index_by_header_is_case_insensitive() {
    let resolver = MappingResolver::initialize(&header(&["Story Points", "Desc"]));
    assert_eq!(resolver.column_index_by_header("story points"), Some(0));
    assert_eq!(resolver.column_index_by_header(" DESC "), Some(1));
    assert_eq!(resolver.column_index_by_header("missing"), None);
}

fn arbitrary_field() -> impl Strategy<Value = TargetField> {
    prop::sample::select(TargetField::ALL.to_vec())
}

proptest! {
    /// After every settled call, no two bindings other than skip hold
    /// the same field, whatever the edit sequence was.
    #[test]
    fn uniqueness_holds_for_all_selection_sequences(
        column_count in 1usize..8,
        edits in prop::collection::vec((0usize..8, arbitrary_field()), 0..24),
    ) {
        let names: Vec<String> = (0..column_count)
            .map(|idx| format!("Column {idx}"))
            .collect();
        let mut resolver = MappingResolver::initialize(&names);
        assert_settled(&resolver);
        for (column, field) in edits {
            resolver.set_selection(column, field);
            assert_settled(&resolver);
        }
    }

    /// Recompute never changes a settled resolver.
    #[test]
    fn recompute_idempotent_after_any_edits(
        edits in prop::collection::vec((0usize..4, arbitrary_field()), 0..12),
    ) {
        let names = vec![
            "summary".to_string(),
            "B".to_string(),
            "label".to_string(),
            "D".to_string(),
        ];
        let mut resolver = MappingResolver::initialize(&names);
        for (column, field) in edits {
            resolver.set_selection(column, field);
        }
        let settled = resolver.clone();
        resolver.recompute();
        assert_eq!(resolver, settled);
    }
}
