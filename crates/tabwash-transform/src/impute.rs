//! Missing-value imputation, the final stage.

use tracing::{debug, warn};

use tabwash_model::{CellValue, ColumnType, Table};

use crate::stats::median;

/// Placeholder written into missing text cells.
pub const TEXT_SENTINEL: &str = "Unknown";

/// Fills every remaining gap: text columns get the sentinel, numeric and
/// temporal columns get their column median. Running after the clipper
/// means numeric medians reflect the clipped distribution.
pub fn fill_missing(mut table: Table) -> Table {
    for column in table.columns_mut() {
        let missing = column.cells.iter().filter(|cell| cell.is_missing()).count();
        if missing == 0 {
            continue;
        }
        let fill = match column.ty {
            ColumnType::Text => CellValue::Text(TEXT_SENTINEL.to_string()),
            ColumnType::Numeric | ColumnType::Temporal => {
                let values: Vec<f64> = column
                    .cells
                    .iter()
                    .filter_map(CellValue::as_number)
                    .collect();
                match median(&values) {
                    Some(value) => CellValue::Number(value),
                    None => {
                        // Promotion requires >60% parses, so a typed column
                        // with no values only arises from caller-built
                        // tables. Zero keeps the column type-consistent.
                        warn!(column = %column.name, "no median available, filling with 0");
                        CellValue::Number(0.0)
                    }
                }
            }
        };
        debug!(column = %column.name, missing, "imputing missing cells");
        for cell in &mut column.cells {
            if cell.is_missing() {
                *cell = fill.clone();
            }
        }
    }
    table
}
