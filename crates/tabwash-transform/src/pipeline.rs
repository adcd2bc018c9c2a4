//! The cleaning pipeline orchestrator.
//!
//! Stages run in a fixed, non-reorderable sequence:
//!
//! 1. header normalization
//! 2. text cell trimming
//! 3. duplicate row removal
//! 4. number-word conversion
//! 5. numeric type coercion
//! 6. outlier clipping
//! 7. temporal type coercion
//! 8. missing-value imputation
//!
//! The temporal pass runs after clipping on purpose: date columns are
//! bounded by parse validity, never by an IQR window. Likewise clipping
//! runs before imputation so imputed medians come from the clipped
//! distribution.
//!
//! Every stage takes the table by value and returns it; the caller hands
//! over ownership once and gets a new table back. Data-quality problems
//! (unparseable cells, unmet vote thresholds, degenerate spreads) are
//! absorbed at cell or column granularity and never surface as errors.

use tracing::{debug, info, info_span};

use tabwash_model::{CleaningReport, ColumnType, Table, TypeDecision};

use crate::cells::trim_text_cells;
use crate::coerce::{promote_numeric_columns, promote_temporal_columns};
use crate::dedupe::remove_duplicate_rows;
use crate::headers::normalize_headers;
use crate::impute::fill_missing;
use crate::outliers::clip_outliers;
use crate::words::convert_word_numbers;

/// Runs the full pipeline over an owned table, returning the cleaned table
/// and a report of what happened. Applying it to an already-clean table is
/// a no-op apart from a fresh report.
pub fn clean(table: Table) -> (Table, CleaningReport) {
    let span = info_span!("clean", rows = table.row_count(), columns = table.column_count());
    let _guard = span.enter();

    let table = normalize_headers(table);
    let entry_types: Vec<(String, ColumnType)> = table
        .columns()
        .iter()
        .map(|column| (column.name.clone(), column.ty))
        .collect();

    let table = trim_text_cells(table);
    let (table, duplicates_removed) = remove_duplicate_rows(table);
    debug!(duplicates_removed, "dedupe complete");

    let table = convert_word_numbers(table);
    let table = promote_numeric_columns(table);
    let table = clip_outliers(table);
    let table = promote_temporal_columns(table);
    let table = fill_missing(table);

    let type_decisions = entry_types
        .into_iter()
        .zip(table.columns())
        .map(|((column, before), after)| TypeDecision {
            column,
            before,
            after: after.ty,
        })
        .collect();
    let report = CleaningReport {
        duplicates_removed,
        type_decisions,
    };
    info!(
        rows = table.row_count(),
        duplicates_removed,
        promoted = report.promoted_count(),
        "cleaning complete"
    );
    (table, report)
}
