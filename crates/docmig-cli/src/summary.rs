use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::NormalizeResult;

pub fn print_summary(result: &NormalizeResult) {
    if let Some(path) = &result.output {
        eprintln!("Output: {}", path.display());
    }
    eprintln!("{}", summary_table(result));
}

/// Per-field change counts followed by a totals row.
pub fn summary_table(result: &NormalizeResult) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![header_cell("Field"), header_cell("Documents changed")]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for (field, count) in &result.field_changes {
        table.add_row(vec![Cell::new(field), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} / {}", result.changed_documents, result.documents))
            .add_attribute(Attribute::Bold),
    ]);
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}
