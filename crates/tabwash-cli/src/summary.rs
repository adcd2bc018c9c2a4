//! Human-facing summary tables printed after commands.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::{CleanOutcome, ColumnProfile};

pub fn print_clean_summary(outcome: &CleanOutcome) {
    if let Some(path) = &outcome.output {
        println!("Cleaned table: {}", path.display());
    }
    if let Some(path) = &outcome.report_path {
        println!("Report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Rows loaded"), Cell::new(outcome.rows_loaded)]);
    table.add_row(vec![
        Cell::new("Rows after cleaning"),
        Cell::new(outcome.rows_cleaned),
    ]);
    table.add_row(vec![
        Cell::new("Duplicates removed"),
        count_cell(outcome.report.duplicates_removed),
    ]);
    table.add_row(vec![
        Cell::new("Columns promoted"),
        count_cell(outcome.report.promoted_count()),
    ]);
    if let (Some(column), Some(total), Some(mean)) = (
        outcome.metrics.primary_column.as_deref(),
        outcome.metrics.total,
        outcome.metrics.mean,
    ) {
        table.add_row(vec![
            Cell::new(format!("Total {column}")),
            Cell::new(format!("{total:.2}")),
        ]);
        table.add_row(vec![
            Cell::new(format!("Average {column}")),
            Cell::new(format!("{mean:.2}")),
        ]);
    }
    println!("{table}");

    print_type_decisions(outcome);
}

fn print_type_decisions(outcome: &CleanOutcome) {
    if outcome.report.type_decisions.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Before"),
        header_cell("After"),
    ]);
    apply_table_style(&mut table);
    for decision in &outcome.report.type_decisions {
        let after = if decision.promoted() {
            Cell::new(decision.after.display_name())
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(decision.after.display_name())
        };
        table.add_row(vec![
            Cell::new(&decision.column),
            Cell::new(decision.before.display_name()),
            after,
        ]);
    }
    println!();
    println!("Column types:");
    println!("{table}");
}

pub fn print_inspect_summary(rows: usize, profiles: &[ColumnProfile]) {
    println!("Rows: {rows}");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Non-missing"),
        header_cell("Distinct"),
        header_cell("Numeric %"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for profile in profiles {
        table.add_row(vec![
            Cell::new(&profile.name),
            Cell::new(profile.non_missing),
            Cell::new(profile.distinct),
            Cell::new(format!("{:.0}", profile.numeric_ratio * 100.0)),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
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
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(value: usize) -> Cell {
    if value > 0 {
        Cell::new(value).fg(Color::Yellow).add_attribute(Attribute::Bold)
    } else {
        Cell::new(value).fg(Color::DarkGrey)
    }
}
