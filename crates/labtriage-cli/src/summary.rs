use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use labtriage_engine::BatchOutcome;

use crate::types::CheckResult;

pub fn print_summary(result: &CheckResult) {
    let outcome = &result.outcome;
    let stats = &outcome.stats;

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Rows"),
        header_cell("Matched"),
        header_cell("Deselected"),
        header_cell("Panic"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut total_scanned = 0usize;
    for sheet in &outcome.sheets {
        total_scanned += sheet.stats.rows_scanned;
        table.add_row(vec![
            Cell::new(&sheet.label)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(sheet.stats.rows_scanned),
            Cell::new(sheet.stats.rows_matched),
            count_cell(sheet.stats.rows_deselected, Color::Yellow),
            count_cell(sheet.stats.rows_panicked, Color::Red),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_scanned).add_attribute(Attribute::Bold),
        Cell::new(stats.rows_matched).add_attribute(Attribute::Bold),
        count_cell(stats.rows_deselected, Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(stats.rows_panicked, Color::Red).add_attribute(Attribute::Bold),
    ]);

    println!("Sheets recognized: {}", stats.tables_recognized);
    println!("{table}");
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }

    print_panic_list(outcome);
}

fn print_panic_list(outcome: &BatchOutcome) {
    if outcome.panic_hits.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Test"),
        header_cell("Value"),
        header_cell("Unit"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for hit in &outcome.panic_hits {
        table.add_row(vec![
            Cell::new(&hit.test_name)
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
            Cell::new(hit.value).fg(Color::Red),
            Cell::new(&hit.unit),
        ]);
    }
    println!();
    println!("Panic values:");
    println!("{table}");
    println!("Save stays locked until a reviewer acknowledges these results.");
}

/// Condensed style for reference listings (`rules` subcommand).
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
