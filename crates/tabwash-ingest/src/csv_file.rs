use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use tracing::debug;

use tabwash_model::{CellValue, Column, Table};

fn strip_bom(raw: &str) -> &str {
    raw.trim_matches('\u{feff}')
}

fn cell_from_field(raw: &str) -> CellValue {
    let value = strip_bom(raw);
    if value.trim().is_empty() {
        CellValue::Missing
    } else {
        CellValue::Text(value.to_string())
    }
}

/// Reads a CSV file into a table of Text columns. The first non-blank row
/// is the header; blank rows are skipped; short rows are padded with
/// `Missing` and long rows truncated to the header width. Raw header text
/// is kept as-is (the cleaning pipeline owns normalization).
pub fn read_table(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<CellValue>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        match &headers {
            None => {
                headers = Some(record.iter().map(|h| strip_bom(h).to_string()).collect());
            }
            Some(names) => {
                let mut row = Vec::with_capacity(names.len());
                for index in 0..names.len() {
                    row.push(cell_from_field(record.get(index).unwrap_or("")));
                }
                rows.push(row);
            }
        }
    }

    let Some(headers) = headers else {
        bail!("no header row found in {}", path.display());
    };
    let columns: Vec<Column> = headers
        .into_iter()
        .enumerate()
        .map(|(index, name)| {
            Column::text(name, rows.iter().map(|row| row[index].clone()).collect())
        })
        .collect();
    let table = Table::from_columns(columns).context("assemble table")?;
    debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded csv"
    );
    Ok(table)
}
