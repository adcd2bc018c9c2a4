//! Export of cleaned tables and cleaning reports, plus the headline
//! metrics shown after a clean. Thin consumers of the pipeline output;
//! no cleaning logic lives here.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use tabwash_model::{CellValue, CleaningReport, Column, ColumnType, Table};
use tabwash_transform::datetime::format_epoch_days;
use tabwash_transform::numeric::format_number;

/// Renders one cell the way the column's type tag dictates: numbers
/// without trailing zeros, temporal day counts as ISO dates.
pub fn format_cell(column: &Column, cell: &CellValue) -> String {
    match cell {
        CellValue::Text(value) => value.clone(),
        CellValue::Number(value) => match column.ty {
            ColumnType::Temporal => format_epoch_days(*value),
            _ => format_number(*value),
        },
        CellValue::Missing => String::new(),
    }
}

/// Writes a table as CSV.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create csv: {}", path.display()))?;
    let headers: Vec<&str> = table
        .columns()
        .iter()
        .map(|column| column.name.as_str())
        .collect();
    writer.write_record(&headers).context("write header")?;
    for index in 0..table.row_count() {
        let row: Vec<String> = table
            .columns()
            .iter()
            .map(|column| format_cell(column, &column.cells[index]))
            .collect();
        writer.write_record(&row).context("write row")?;
    }
    writer.flush().context("flush csv")?;
    Ok(())
}

/// Writes a cleaning report as pretty JSON.
pub fn write_report(path: &Path, report: &CleaningReport) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create report: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report).context("serialize report")?;
    writer.write_all(b"\n").context("finish report")?;
    writer.flush().context("flush report")?;
    Ok(())
}

/// Headline numbers for a cleaned table: record count plus total and mean
/// of the first numeric column, when one exists.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlineMetrics {
    pub record_count: usize,
    pub primary_column: Option<String>,
    pub total: Option<f64>,
    pub mean: Option<f64>,
}

pub fn summary_metrics(table: &Table) -> HeadlineMetrics {
    let record_count = table.row_count();
    let Some(column) = table
        .columns()
        .iter()
        .find(|column| column.ty == ColumnType::Numeric)
    else {
        return HeadlineMetrics {
            record_count,
            primary_column: None,
            total: None,
            mean: None,
        };
    };
    let values: Vec<f64> = column
        .cells
        .iter()
        .filter_map(CellValue::as_number)
        .collect();
    let total: f64 = values.iter().sum();
    let mean = if values.is_empty() {
        None
    } else {
        Some(total / values.len() as f64)
    };
    HeadlineMetrics {
        record_count,
        primary_column: Some(column.name.clone()),
        total: Some(total),
        mean,
    }
}
