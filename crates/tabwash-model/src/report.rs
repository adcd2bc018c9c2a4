use serde::{Deserialize, Serialize};

use crate::table::ColumnType;

/// Type tag recorded for one column before and after the coercion passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecision {
    pub column: String,
    pub before: ColumnType,
    pub after: ColumnType,
}

impl TypeDecision {
    pub fn promoted(&self) -> bool {
        self.before != self.after
    }
}

/// What one pipeline run did to the table it was given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub duplicates_removed: usize,
    pub type_decisions: Vec<TypeDecision>,
}

impl CleaningReport {
    pub fn promoted_count(&self) -> usize {
        self.type_decisions
            .iter()
            .filter(|decision| decision.promoted())
            .count()
    }

    pub fn decision(&self, column: &str) -> Option<&TypeDecision> {
        self.type_decisions
            .iter()
            .find(|decision| decision.column == column)
    }
}
