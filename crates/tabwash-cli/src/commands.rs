//! The `clean` and `inspect` commands.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tabwash_ingest::read_table;
use tabwash_model::{CellValue, CleaningReport, Table};
use tabwash_report::{HeadlineMetrics, summary_metrics, write_report, write_table};
use tabwash_transform::clean;
use tabwash_transform::numeric::parse_f64;

use crate::cli::{CleanArgs, InspectArgs};

/// Everything the summary printer needs after a clean run.
#[derive(Debug)]
pub struct CleanOutcome {
    pub rows_loaded: usize,
    pub rows_cleaned: usize,
    pub report: CleaningReport,
    pub metrics: HeadlineMetrics,
    pub output: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanOutcome> {
    let span = info_span!("clean_file", input = %args.input.display());
    let _guard = span.enter();

    let start = Instant::now();
    let table = read_table(&args.input)?;
    let rows_loaded = table.row_count();
    info!(
        rows = rows_loaded,
        columns = table.column_count(),
        "loaded input"
    );

    let (cleaned, report) = clean(table);
    let rows_cleaned = cleaned.row_count();
    let metrics = summary_metrics(&cleaned);

    let (output, report_path) = if args.dry_run {
        (None, None)
    } else {
        let output = args
            .output
            .clone()
            .unwrap_or_else(|| derived_path(&args.input, "_cleaned.csv"));
        let report_path = args
            .report
            .clone()
            .unwrap_or_else(|| derived_path(&args.input, "_report.json"));
        write_table(&output, &cleaned)
            .with_context(|| format!("write cleaned table: {}", output.display()))?;
        write_report(&report_path, &report)
            .with_context(|| format!("write report: {}", report_path.display()))?;
        (Some(output), Some(report_path))
    };

    info!(
        rows_loaded,
        rows_cleaned,
        duplicates_removed = report.duplicates_removed,
        duration_ms = start.elapsed().as_millis(),
        "clean complete"
    );
    Ok(CleanOutcome {
        rows_loaded,
        rows_cleaned,
        report,
        metrics,
        output,
        report_path,
    })
}

/// One row of the inspect profile.
#[derive(Debug)]
pub struct ColumnProfile {
    pub name: String,
    pub non_missing: usize,
    pub distinct: usize,
    pub numeric_ratio: f64,
}

pub fn run_inspect(args: &InspectArgs) -> Result<(usize, Vec<ColumnProfile>)> {
    let table = read_table(&args.input)?;
    let rows = table.row_count();
    Ok((rows, profile_columns(&table)))
}

pub fn profile_columns(table: &Table) -> Vec<ColumnProfile> {
    let rows = table.row_count();
    table
        .columns()
        .iter()
        .map(|column| {
            let mut distinct: BTreeSet<&str> = BTreeSet::new();
            let mut non_missing = 0usize;
            let mut numeric = 0usize;
            for cell in &column.cells {
                match cell {
                    CellValue::Text(value) => {
                        let trimmed = value.trim();
                        if trimmed.is_empty() {
                            continue;
                        }
                        non_missing += 1;
                        distinct.insert(trimmed);
                        if parse_f64(trimmed).is_some() {
                            numeric += 1;
                        }
                    }
                    CellValue::Number(_) => {
                        non_missing += 1;
                        numeric += 1;
                    }
                    CellValue::Missing => {}
                }
            }
            ColumnProfile {
                name: column.name.clone(),
                non_missing,
                distinct: distinct.len(),
                numeric_ratio: if rows == 0 {
                    0.0
                } else {
                    numeric as f64 / rows as f64
                },
            }
        })
        .collect()
}

fn derived_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("data");
    input.with_file_name(format!("{stem}{suffix}"))
}
