//! Majority-vote type promotion for Text columns.
//!
//! A column is promoted only when strictly more than 60% of ALL rows parse
//! under the candidate type. Counting against the total row count (not just
//! non-missing cells) deliberately blocks promotion of mostly-empty
//! columns, however cleanly their few values parse.

use tracing::debug;

use tabwash_model::{CellValue, ColumnType, Table};

use crate::datetime::{parse_date, to_epoch_days};
use crate::numeric::cell_number;

/// Promotion requires parsed_count / row_count > 3/5, compared in integers
/// so the boundary is exact.
fn meets_threshold(parsed: usize, rows: usize) -> bool {
    parsed * 5 > rows * 3
}

/// Numeric pass: each Text column whose cells parse as numbers in more
/// than 60% of rows is committed `Numeric`; its unparseable cells become
/// `Missing`. Columns under the threshold are left exactly as they were.
pub fn promote_numeric_columns(mut table: Table) -> Table {
    let rows = table.row_count();
    for column in table.columns_mut() {
        if column.ty != ColumnType::Text {
            continue;
        }
        let parsed: Vec<Option<f64>> = column.cells.iter().map(cell_number).collect();
        let hits = parsed.iter().flatten().count();
        if !meets_threshold(hits, rows) {
            continue;
        }
        debug!(column = %column.name, parsed = hits, rows, "promoting column to numeric");
        column.ty = ColumnType::Numeric;
        for (cell, value) in column.cells.iter_mut().zip(parsed) {
            *cell = match value {
                Some(number) => CellValue::Number(number),
                None => CellValue::Missing,
            };
        }
    }
    table
}

/// Temporal pass over columns still Text after the numeric pass. Committed
/// columns store their dates as days since the epoch.
pub fn promote_temporal_columns(mut table: Table) -> Table {
    let rows = table.row_count();
    for column in table.columns_mut() {
        if column.ty != ColumnType::Text {
            continue;
        }
        let parsed: Vec<Option<f64>> = column
            .cells
            .iter()
            .map(|cell| {
                cell.as_text()
                    .and_then(parse_date)
                    .map(to_epoch_days)
            })
            .collect();
        let hits = parsed.iter().flatten().count();
        if !meets_threshold(hits, rows) {
            continue;
        }
        debug!(column = %column.name, parsed = hits, rows, "promoting column to temporal");
        column.ty = ColumnType::Temporal;
        for (cell, value) in column.cells.iter_mut().zip(parsed) {
            *cell = match value {
                Some(days) => CellValue::Number(days),
                None => CellValue::Missing,
            };
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabwash_model::Column;

    fn table_of(cells: Vec<CellValue>) -> Table {
        Table::from_columns(vec![Column::text("c", cells)]).expect("build table")
    }

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.into())
    }

    #[test]
    fn threshold_is_strict() {
        assert!(meets_threshold(7, 10));
        assert!(!meets_threshold(6, 10)); // exactly 60% is not enough
        assert!(!meets_threshold(5, 10));
        assert!(!meets_threshold(0, 0));
    }

    #[test]
    fn seven_of_ten_numeric_promotes() {
        let mut cells: Vec<CellValue> = (1..=7).map(|v| text(&v.to_string())).collect();
        cells.extend([text("a"), text("b"), text("c")]);
        let table = promote_numeric_columns(table_of(cells));
        let column = &table.columns()[0];
        assert_eq!(column.ty, ColumnType::Numeric);
        assert_eq!(column.cells[0], CellValue::Number(1.0));
        assert_eq!(column.cells[7], CellValue::Missing);
    }

    #[test]
    fn five_of_ten_numeric_stays_text() {
        let mut cells: Vec<CellValue> = (1..=5).map(|v| text(&v.to_string())).collect();
        cells.extend((0..5).map(|_| text("x")));
        let table = promote_numeric_columns(table_of(cells));
        let column = &table.columns()[0];
        assert_eq!(column.ty, ColumnType::Text);
        assert_eq!(column.cells[0], text("1"));
        assert_eq!(column.cells[9], text("x"));
    }

    #[test]
    fn sparsity_blocks_promotion() {
        // Every non-missing cell parses, but only 4 of 10 rows have data.
        let mut cells: Vec<CellValue> = (1..=4).map(|v| text(&v.to_string())).collect();
        cells.extend((0..6).map(|_| CellValue::Missing));
        let table = promote_numeric_columns(table_of(cells));
        assert_eq!(table.columns()[0].ty, ColumnType::Text);
    }

    #[test]
    fn word_converted_number_cells_count_toward_numeric() {
        let cells = vec![
            CellValue::Number(7.0),
            CellValue::Number(120.0),
            text("3.5"),
            text("oops"),
        ];
        let table = promote_numeric_columns(table_of(cells));
        let column = &table.columns()[0];
        assert_eq!(column.ty, ColumnType::Numeric);
        assert_eq!(column.cells[3], CellValue::Missing);
    }

    #[test]
    fn temporal_pass_commits_epoch_days() {
        let cells = vec![
            text("2024-01-15"),
            text("01/16/2024"),
            text("17-Jan-2024"),
            text("junk"),
        ];
        let table = promote_temporal_columns(table_of(cells));
        let column = &table.columns()[0];
        assert_eq!(column.ty, ColumnType::Temporal);
        let first = column.cells[0].as_number().expect("days");
        let second = column.cells[1].as_number().expect("days");
        assert_eq!(second - first, 1.0);
        assert_eq!(column.cells[3], CellValue::Missing);
    }

    #[test]
    fn temporal_pass_skips_committed_numeric_columns() {
        let cells = vec![text("1"), text("2"), text("3")];
        let table = promote_numeric_columns(table_of(cells));
        let table = promote_temporal_columns(table);
        assert_eq!(table.columns()[0].ty, ColumnType::Numeric);
    }
}
