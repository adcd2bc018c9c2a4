//! Library surface of the tabwash CLI, kept separate from the binary so
//! commands can be driven from integration tests.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
