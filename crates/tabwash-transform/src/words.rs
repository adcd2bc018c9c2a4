//! English number-word parsing ("two thousand five" -> 2005).

use tabwash_model::{CellValue, ColumnType, Table};

/// Outcome of parsing one cell. Failure is a value, not an error: the
/// caller keeps the original string and moves on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WordParse {
    Parsed(f64),
    Unchanged,
}

enum Scale {
    Unit(u64),
    Multiplier(u64),
}

fn word_scale(token: &str) -> Option<Scale> {
    let value = match token {
        "zero" => 0,
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "twenty" => 20,
        "thirty" => 30,
        "forty" => 40,
        "fifty" => 50,
        "sixty" => 60,
        "seventy" => 70,
        "eighty" => 80,
        "ninety" => 90,
        "hundred" => return Some(Scale::Multiplier(100)),
        "thousand" => return Some(Scale::Multiplier(1000)),
        _ => return None,
    };
    Some(Scale::Unit(value))
}

/// Parses a whole string of number words. Any token outside the word table
/// fails the whole cell.
pub fn parse_number_words(text: &str) -> WordParse {
    let lowered = text.to_lowercase();
    let mut tokens = lowered.split_whitespace().peekable();
    if tokens.peek().is_none() {
        return WordParse::Unchanged;
    }
    let mut total: u64 = 0;
    let mut current: u64 = 0;
    for token in tokens {
        match word_scale(token) {
            Some(Scale::Unit(value)) => current += value,
            Some(Scale::Multiplier(scale)) => {
                current = current.max(1) * scale;
                total += current;
                current = 0;
            }
            None => return WordParse::Unchanged,
        }
    }
    WordParse::Parsed((total + current) as f64)
}

/// Rewrites word-number text cells in Text-typed columns as numbers.
/// Non-text cells and unparseable strings pass through untouched.
pub fn convert_word_numbers(mut table: Table) -> Table {
    for column in table.columns_mut() {
        if column.ty != ColumnType::Text {
            continue;
        }
        for cell in &mut column.cells {
            if let CellValue::Text(value) = cell {
                if let WordParse::Parsed(number) = parse_number_words(value) {
                    *cell = CellValue::Number(number);
                }
            }
        }
    }
    table
}
