//! Numeric parsing and formatting helpers.

use tabwash_model::CellValue;

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Numeric reading of a cell: `Number` payloads pass through (covers cells
/// already converted from number words), text is parsed, missing is None.
pub fn cell_number(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Number(value) => Some(*value),
        CellValue::Text(value) => parse_f64(value),
        CellValue::Missing => None,
    }
}

/// Formats a floating-point number without trailing zeros ("10.50" -> "10.5",
/// "10.0" -> "10").
pub fn format_number(value: f64) -> String {
    let s = format!("{value}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_f64_handles_padding_and_garbage() {
        assert_eq!(parse_f64(" 42.5 "), Some(42.5));
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("n/a"), None);
        assert_eq!(parse_f64("inf"), None);
    }

    #[test]
    fn cell_number_reads_all_variants() {
        assert_eq!(cell_number(&CellValue::Number(7.0)), Some(7.0));
        assert_eq!(cell_number(&CellValue::Text("3.5".into())), Some(3.5));
        assert_eq!(cell_number(&CellValue::Text("abc".into())), None);
        assert_eq!(cell_number(&CellValue::Missing), None);
    }

    #[test]
    fn format_number_strips_trailing_zeros() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(10.5), "10.5");
        assert_eq!(format_number(0.25), "0.25");
    }
}
