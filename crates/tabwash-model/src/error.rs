use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("column {column}: expected {expected} cells, found {actual}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
    #[error("unknown column: {0}")]
    UnknownColumn(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
