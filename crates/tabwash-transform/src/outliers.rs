//! Interquartile-range outlier clipping for Numeric columns.

use tracing::debug;

use tabwash_model::{CellValue, ColumnType, Table};

use crate::stats::{median, quartiles};

const IQR_MULTIPLIER: f64 = 1.5;
const MIN_SAMPLES_FOR_SPREAD: usize = 4;

/// Clamps every non-missing value of each Numeric column into
/// `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]`. With fewer than four samples or zero
/// spread the bounds collapse to a single point and every value is clamped
/// to it; that degenerate behavior is part of the contract. Temporal
/// columns are not clipped.
pub fn clip_outliers(mut table: Table) -> Table {
    for column in table.columns_mut() {
        if column.ty != ColumnType::Numeric {
            continue;
        }
        let values: Vec<f64> = column
            .cells
            .iter()
            .filter_map(CellValue::as_number)
            .collect();
        let Some((lower, upper)) = clip_bounds(&values) else {
            continue;
        };
        let mut clipped = 0usize;
        for cell in &mut column.cells {
            if let CellValue::Number(value) = cell {
                let clamped = value.clamp(lower, upper);
                if clamped != *value {
                    *value = clamped;
                    clipped += 1;
                }
            }
        }
        if clipped > 0 {
            debug!(column = %column.name, clipped, lower, upper, "clipped outliers");
        }
    }
    table
}

/// IQR bounds over a column's non-missing values, None when there is
/// nothing to bound.
pub fn clip_bounds(values: &[f64]) -> Option<(f64, f64)> {
    if values.len() < MIN_SAMPLES_FOR_SPREAD {
        let point = median(values)?;
        return Some((point, point));
    }
    let (q1, q3) = quartiles(values)?;
    let iqr = q3 - q1;
    Some((q1 - IQR_MULTIPLIER * iqr, q3 + IQR_MULTIPLIER * iqr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabwash_model::Column;

    fn numeric_column(values: &[Option<f64>]) -> Table {
        let cells = values
            .iter()
            .map(|value| match value {
                Some(v) => CellValue::Number(*v),
                None => CellValue::Missing,
            })
            .collect();
        let mut table = Table::from_columns(vec![Column::text("c", cells)]).expect("build table");
        table.columns_mut()[0].ty = ColumnType::Numeric;
        table
    }

    #[test]
    fn clips_high_outlier_to_upper_bound() {
        // Q1=2, Q3=4, IQR=2 -> bounds [-1, 7].
        let table = clip_outliers(numeric_column(&[
            Some(1.0),
            Some(2.0),
            Some(3.0),
            Some(4.0),
            Some(100.0),
        ]));
        let cells = &table.columns()[0].cells;
        assert_eq!(cells[0], CellValue::Number(1.0));
        assert_eq!(cells[3], CellValue::Number(4.0));
        assert_eq!(cells[4], CellValue::Number(7.0));
    }

    #[test]
    fn missing_cells_are_ignored() {
        let table = clip_outliers(numeric_column(&[
            Some(1.0),
            None,
            Some(2.0),
            Some(3.0),
            Some(4.0),
            Some(-50.0),
        ]));
        let cells = &table.columns()[0].cells;
        assert_eq!(cells[1], CellValue::Missing);
        // Sorted values [-50, 1, 2, 3, 4]: Q1=1, Q3=3, IQR=2 -> lower bound -2.
        assert_eq!(cells[5], CellValue::Number(-2.0));
    }

    #[test]
    fn fewer_than_four_samples_collapse_to_median() {
        let table = clip_outliers(numeric_column(&[Some(1.0), Some(2.0), Some(9.0)]));
        let cells = &table.columns()[0].cells;
        assert_eq!(cells[0], CellValue::Number(2.0));
        assert_eq!(cells[1], CellValue::Number(2.0));
        assert_eq!(cells[2], CellValue::Number(2.0));
    }

    #[test]
    fn zero_variance_collapses_to_the_point() {
        let table = clip_outliers(numeric_column(&[
            Some(5.0),
            Some(5.0),
            Some(5.0),
            Some(5.0),
            Some(5.0),
        ]));
        assert!(table.columns()[0]
            .cells
            .iter()
            .all(|cell| *cell == CellValue::Number(5.0)));
    }

    #[test]
    fn text_and_temporal_columns_untouched() {
        let mut table = Table::from_columns(vec![Column::text(
            "d",
            vec![CellValue::Number(0.0), CellValue::Number(100000.0)],
        )])
        .expect("build table");
        table.columns_mut()[0].ty = ColumnType::Temporal;
        let table = clip_outliers(table);
        assert_eq!(table.columns()[0].cells[1], CellValue::Number(100000.0));
    }
}
