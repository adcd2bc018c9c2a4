//! Cell-level whitespace cleanup, applied before any parsing so stray
//! padding cannot defeat numeric or date inference.

use tabwash_model::{CellValue, Table};

/// Trims every text cell; text that trims to empty becomes `Missing`.
/// Non-text cells pass through unchanged.
pub fn trim_text_cells(mut table: Table) -> Table {
    for column in table.columns_mut() {
        for cell in &mut column.cells {
            if let CellValue::Text(value) = cell {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    *cell = CellValue::Missing;
                } else if trimmed.len() != value.len() {
                    *cell = CellValue::Text(trimmed.to_string());
                }
            }
        }
    }
    table
}
