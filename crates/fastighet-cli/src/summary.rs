use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use fastighet_cli::pipeline::EtlRunResult;
use fastighet_predict::{Leader, Tally};

pub fn print_summary(result: &EtlRunResult) {
    println!("Source: {}", result.source.display());
    if result.dry_run {
        println!("Database: {} (dry run, nothing written)", result.database.display());
    } else {
        println!("Database: {}", result.database.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Property type"),
        header_cell("Table"),
        header_cell("Rows"),
        header_cell("Stored"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    let mut total_rows = 0usize;
    for partition in &result.partitions {
        total_rows += partition.rows;
        table.add_row(vec![
            Cell::new(&partition.property_type)
                .fg(comfy_table::Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&partition.table),
            Cell::new(partition.rows),
            stored_cell(partition.written),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(comfy_table::Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
    println!(
        "Read {} rows, pruned {} columns, dropped {} rows without a listing key",
        result.input_rows, result.pruned_columns, result.dropped_rows
    );
    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

pub fn print_vote_tally(tally: &Tally) {
    if tally.by_type.is_empty() {
        println!("No votes recorded yet.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Property type"),
        header_cell("LightGBM"),
        header_cell("CatBoost"),
        header_cell("Neither"),
        header_cell("Leader"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (property_type, counts) in &tally.by_type {
        table.add_row(vec![
            Cell::new(property_type)
                .fg(comfy_table::Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(counts.lightgbm),
            Cell::new(counts.catboost),
            Cell::new(counts.neither),
            leader_cell(counts.leader()),
        ]);
    }
    println!("{table}");
}

fn leader_cell(leader: Option<Leader>) -> Cell {
    match leader {
        Some(Leader::Ahead { family, percent }) => {
            Cell::new(format!("{family} ({percent:.0}%)"))
                .fg(comfy_table::Color::Green)
                .add_attribute(Attribute::Bold)
        }
        Some(Leader::Tie) => Cell::new("Tie").fg(comfy_table::Color::Yellow),
        None => dim_cell("-"),
    }
}

fn stored_cell(written: bool) -> Cell {
    if written {
        Cell::new("✓")
            .fg(comfy_table::Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(comfy_table::Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(comfy_table::Color::DarkGrey)
}
