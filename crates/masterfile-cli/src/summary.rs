use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use masterfile_map::{ColumnPlan, ColumnSource};
use masterfile_output::XLSX_MIME_TYPE;

use masterfile_cli::pipeline::BuildOutcome;

pub fn print_summary(outcome: &BuildOutcome) {
    match &outcome.output {
        Some(path) => {
            println!("Masterfile generated successfully.");
            println!("Output: {}", path.display());
        }
        None => println!("Masterfile built (dry run, nothing written)."),
    }
    println!("Type: {XLSX_MIME_TYPE}");
    println!(
        "Rows: {}  Columns: {} ({} mapped, {} blank)",
        outcome.table.row_count(),
        outcome.table.column_count(),
        outcome.plan.mapped_count(),
        outcome.plan.blank_count()
    );

    println!("{}", plan_table(outcome));

    let unused = outcome.plan.unused_keys();
    if !unused.is_empty() {
        println!("Unused mapping keys: {}", unused.join(", "));
    }
}

/// One row per target column: position, target, source and status.
fn plan_table(outcome: &BuildOutcome) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Target column"),
        header_cell("Source column"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    for (index, plan) in outcome.plan.columns().iter().enumerate() {
        table.add_row(plan_row(index + 1, plan));
    }
    align_column(&mut table, 0, CellAlignment::Right);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn plan_row(position: usize, plan: &ColumnPlan) -> Vec<Cell> {
    let (source, status) = match &plan.source {
        ColumnSource::Mapped(name) => (Cell::new(name), Cell::new("mapped").fg(Color::Green)),
        ColumnSource::Unmapped => (dim_cell("-"), dim_cell("blank")),
        ColumnSource::MissingSource(name) => (
            Cell::new(name).fg(Color::Yellow),
            Cell::new("source missing").fg(Color::Yellow),
        ),
    };
    vec![dim_cell(position), Cell::new(&plan.target), source, status]
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
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
