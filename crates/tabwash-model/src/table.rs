use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A single cell. `Number` carries both plain numerics and, for columns
/// committed as `Temporal`, days since the Unix epoch; the owning column's
/// type tag decides how the payload reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) => Some(*value),
            _ => None,
        }
    }
}

// Row dedupe needs Eq + Hash over full rows. Numbers compare bitwise so
// the enum stays hashable; cleaning never produces NaN, and distinct NaN
// bit patterns comparing unequal is acceptable for duplicate detection.
impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CellValue::Text(a), CellValue::Text(b)) => a == b,
            (CellValue::Number(a), CellValue::Number(b)) => a.to_bits() == b.to_bits(),
            (CellValue::Missing, CellValue::Missing) => true,
            _ => false,
        }
    }
}

impl Eq for CellValue {}

impl Hash for CellValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            CellValue::Text(value) => {
                state.write_u8(0);
                value.hash(state);
            }
            CellValue::Number(value) => {
                state.write_u8(1);
                state.write_u64(value.to_bits());
            }
            CellValue::Missing => state.write_u8(2),
        }
    }
}

/// Type tag assigned once per column by the coercion passes. Downstream
/// consumers dispatch on this tag, never on individual cell payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Text,
    Numeric,
    Temporal,
}

impl ColumnType {
    pub fn display_name(self) -> &'static str {
        match self {
            ColumnType::Text => "Text",
            ColumnType::Numeric => "Numeric",
            ColumnType::Temporal => "Temporal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub ty: ColumnType,
    pub cells: Vec<CellValue>,
}

impl Column {
    /// A text-typed column, the shape every loader produces.
    pub fn text(name: impl Into<String>, cells: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            ty: ColumnType::Text,
            cells,
        }
    }

    pub fn non_missing(&self) -> impl Iterator<Item = &CellValue> {
        self.cells.iter().filter(|cell| !cell.is_missing())
    }
}

/// An ordered set of equally long named columns. Rows have positional
/// identity only; there is no primary key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from prepared columns, rejecting ragged input.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let expected = first.cells.len();
            for column in &columns {
                if column.cells.len() != expected {
                    return Err(ModelError::ColumnLengthMismatch {
                        column: column.name.clone(),
                        expected,
                        actual: column.cells.len(),
                    });
                }
            }
        }
        Ok(Self { columns })
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |column| column.cells.len())
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() || self.row_count() == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// The cell tuple at `index` across all columns, in column order.
    pub fn row(&self, index: usize) -> Vec<&CellValue> {
        self.columns
            .iter()
            .map(|column| &column.cells[index])
            .collect()
    }

    /// Keeps only the rows whose mask entry is true. The mask length must
    /// equal the row count.
    pub fn retain_rows(&mut self, keep: &[bool]) {
        debug_assert_eq!(keep.len(), self.row_count());
        for column in &mut self.columns {
            let mut index = 0;
            column.cells.retain(|_| {
                let kept = keep[index];
                index += 1;
                kept
            });
        }
    }
}
