pub mod error;
pub mod report;
pub mod state;
pub mod table;

pub use error::{ModelError, Result};
pub use report::{CleaningReport, TypeDecision};
pub use state::DatasetState;
pub use table::{CellValue, Column, ColumnType, Table};
