//! Column header canonicalization.

use std::collections::BTreeSet;

use tabwash_model::Table;

/// Canonical form of a single header: surrounding whitespace trimmed,
/// lower-cased, internal whitespace runs replaced with underscores.
pub fn normalize_name(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let mut normalized = String::with_capacity(lowered.len());
    let mut parts = lowered.split_whitespace();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push('_');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Normalizes every column name in place. When two distinct headers collapse
/// to the same canonical name, later columns get a numeric suffix
/// (`name`, `name_2`, `name_3`, ...) so no data is silently shadowed.
pub fn normalize_headers(mut table: Table) -> Table {
    let mut seen: BTreeSet<String> = BTreeSet::new();
    for column in table.columns_mut() {
        let base = normalize_name(&column.name);
        let mut candidate = base.clone();
        let mut suffix = 2;
        while !seen.insert(candidate.clone()) {
            candidate = format!("{base}_{suffix}");
            suffix += 1;
        }
        column.name = candidate;
    }
    table
}
