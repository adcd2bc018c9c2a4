//! Exact-duplicate row removal.

use std::collections::HashSet;

use tabwash_model::{CellValue, Table};

/// Drops every row that structurally equals an earlier row across all
/// columns, keeping the first occurrence. Returns the table and the number
/// of rows removed.
pub fn remove_duplicate_rows(mut table: Table) -> (Table, usize) {
    let row_count = table.row_count();
    if row_count == 0 {
        return (table, 0);
    }
    let mut seen: HashSet<Vec<CellValue>> = HashSet::with_capacity(row_count);
    let mut keep = Vec::with_capacity(row_count);
    for index in 0..row_count {
        let row: Vec<CellValue> = table.row(index).into_iter().cloned().collect();
        keep.push(seen.insert(row));
    }
    let removed = keep.iter().filter(|kept| !**kept).count();
    if removed > 0 {
        table.retain_rows(&keep);
    }
    (table, removed)
}
