//! Data ingestion: loading uploaded files into the table model.
//!
//! The loader is deliberately dumb. Everything comes in as Text or
//! Missing; typing, trimming, and deduplication belong to the cleaning
//! pipeline.

pub mod csv_file;

pub use csv_file::read_table;
