use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use lifting_cli::types::{LoadSummary, RunResult};
use lifting_model::RelationKind;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    println!("SHA-256: {}", result.input_sha256);
    print_stage_table(result);
    print_relation_table(result);
    print_load_table(&result.loads);
    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

fn print_stage_table(result: &RunResult) {
    let stats = &result.stats;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Rows"),
        header_cell("Excluded"),
        header_cell("Notes"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    table.add_row(vec![
        Cell::new("clean"),
        Cell::new(stats.clean.output_rows),
        count_cell(stats.clean.duplicate_rows, Color::Yellow),
        Cell::new(format!(
            "{} input rows, {} degraded fields",
            stats.clean.input_rows, stats.clean.degraded_fields
        )),
    ]);
    for (name, entities) in &stats.dimension_rows {
        let incomplete = stats.incomplete_keys.get(name).copied().unwrap_or_default();
        table.add_row(vec![
            Cell::new(format!("dimension {name}")),
            Cell::new(entities),
            count_cell(incomplete, Color::Yellow),
            dim_cell("incomplete natural keys"),
        ]);
    }
    table.add_row(vec![
        Cell::new("fact")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.fact_rows).add_attribute(Attribute::Bold),
        count_cell(stats.dropped_fact_rows, Color::Yellow),
        dim_cell("unresolved dimension keys"),
    ]);
    println!("{table}");
}

fn print_relation_table(result: &RunResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Relation"),
        header_cell("Kind"),
        header_cell("Columns"),
        header_cell("Rows"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for relation in &result.relations {
        let kind = match relation.kind {
            RelationKind::Fact => Cell::new("fact").fg(Color::Cyan),
            RelationKind::Dimension => Cell::new("dimension"),
        };
        table.add_row(vec![
            Cell::new(&relation.name),
            kind,
            Cell::new(relation.columns),
            Cell::new(relation.rows),
        ]);
    }
    println!("{table}");
}

fn print_load_table(loads: &[LoadSummary]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Target"), header_cell("Rows"), header_cell("Status")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for load in loads {
        let status = if load.succeeded() {
            Cell::new("✓")
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new("failed")
                .fg(Color::Red)
                .add_attribute(Attribute::Bold)
        };
        let rows = load.rows.map_or_else(|| dim_cell("-"), Cell::new);
        table.add_row(vec![Cell::new(&load.target), rows, status]);
    }
    println!("{table}");
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

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
