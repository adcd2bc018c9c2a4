//! Tabular data cleaning and normalization.
//!
//! This crate turns a raw table of mixed-quality text cells into a
//! validated, type-consistent, outlier-bounded table:
//!
//! - **headers**: column name canonicalization
//! - **cells**: whitespace cleanup
//! - **dedupe**: exact-duplicate row removal
//! - **words**: English number-word parsing
//! - **coerce**: majority-vote numeric/temporal promotion
//! - **outliers**: IQR-based clipping
//! - **impute**: sentinel and median fill
//! - **pipeline**: the fixed-order orchestrator

pub mod cells;
pub mod coerce;
pub mod datetime;
pub mod dedupe;
pub mod headers;
pub mod impute;
pub mod numeric;
pub mod outliers;
pub mod pipeline;
pub mod stats;
pub mod words;

pub use impute::TEXT_SENTINEL;
pub use pipeline::clean;
pub use words::{WordParse, parse_number_words};
