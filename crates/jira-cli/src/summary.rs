use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::types::RunSummary;

/// Prints the single per-run outcome message.
pub fn print_run_summary(summary: &RunSummary) {
    let suffix = if summary.dry_run { " (dry run)" } else { "" };
    match &summary.failure {
        None => println!("{} tickets created{suffix}", summary.created),
        Some(failure) => {
            eprintln!("error: {failure}");
            println!(
                "{} tickets created before the failure{suffix}",
                summary.created
            );
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(comfy_table::Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn check_cell(checked: bool) -> Cell {
    if checked {
        Cell::new("✓")
            .fg(comfy_table::Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(comfy_table::Color::DarkGrey)
}
