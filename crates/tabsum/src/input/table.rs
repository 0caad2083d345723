//! Parsed table representation with typed cells.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

/// A decimal-comma number literal: one comma, digits on both sides.
static DECIMAL_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d+,\d+$").unwrap());

/// A single cell, typed once at parse time and never re-inferred.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Empty or recognized missing token.
    Missing,
    /// Value that parses as a finite number.
    Number(f64),
    /// Anything else, kept verbatim.
    Text(String),
}

impl CellValue {
    /// Classify a raw field into a typed cell.
    pub fn from_field(raw: &str) -> Self {
        if is_missing_token(raw) {
            return CellValue::Missing;
        }
        match parse_number(raw) {
            Some(n) => CellValue::Number(n),
            None => CellValue::Text(raw.to_string()),
        }
    }

    /// Whether this cell is missing.
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Numeric value, if this cell holds one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            CellValue::Missing => serializer.serialize_none(),
            CellValue::Number(n) => serializer.serialize_f64(*n),
            CellValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// Check if a raw field represents a missing value.
pub fn is_missing_token(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("na")
        || trimmed.eq_ignore_ascii_case("n/a")
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("none")
        || trimmed.eq_ignore_ascii_case("nan")
}

/// Parse a field as a number, accepting both `.` and `,` decimal separators.
///
/// A comma is normalized to a dot only when the literal has no
/// thousands-style ambiguity: `1,5` is 1.5, but `1,234` could be one
/// thousand two hundred thirty-four and is left unparsed.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if !trimmed.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    if let Ok(v) = trimmed.parse::<f64>() {
        // Rejects inf/NaN spellings that f64::parse would accept.
        return v.is_finite().then_some(v);
    }

    if DECIMAL_COMMA.is_match(trimmed) {
        if let Some(comma) = trimmed.find(',') {
            let frac_digits = trimmed.len() - comma - 1;
            if frac_digits == 3 {
                return None;
            }
            let normalized = trimmed.replacen(',', ".", 1);
            if let Ok(v) = normalized.parse::<f64>() {
                return v.is_finite().then_some(v);
            }
        }
    }

    None
}

/// Represents parsed tabular data.
#[derive(Debug, Clone)]
pub struct Table {
    /// Column headers, unique and in file order.
    pub headers: Vec<String>,
    /// Rows of typed cells; every row has `headers.len()` cells.
    pub rows: Vec<Vec<CellValue>>,
    /// The delimiter used.
    pub delimiter: u8,
}

impl Table {
    /// Create a new table.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>, delimiter: u8) -> Self {
        Self {
            headers,
            rows,
            delimiter,
        }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterate over all cells of a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &CellValue> {
        self.rows
            .iter()
            .map(move |row| row.get(index).unwrap_or(&CellValue::Missing))
    }

    /// Find a column index by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tokens() {
        assert!(is_missing_token(""));
        assert!(is_missing_token("  "));
        assert!(is_missing_token("NA"));
        assert!(is_missing_token("n/a"));
        assert!(is_missing_token("NULL"));
        assert!(is_missing_token("None"));
        assert!(is_missing_token("NaN"));
        assert!(!is_missing_token("value"));
        assert!(!is_missing_token("0"));
    }

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number("-3.5"), Some(-3.5));
        assert_eq!(parse_number(" 1e3 "), Some(1000.0));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("12ab"), None);
    }

    #[test]
    fn test_parse_decimal_comma() {
        assert_eq!(parse_number("1,5"), Some(1.5));
        assert_eq!(parse_number("-2,25"), Some(-2.25));
        assert_eq!(parse_number("1234,5"), Some(1234.5));
    }

    #[test]
    fn test_thousands_ambiguity_is_not_a_number() {
        assert_eq!(parse_number("1,234"), None);
        assert_eq!(parse_number("12,345"), None);
        assert_eq!(parse_number("1,234,567"), None);
        assert_eq!(parse_number("1,234.56"), None);
    }

    #[test]
    fn test_non_finite_spellings_rejected() {
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("1e400"), None);
    }

    #[test]
    fn test_cell_from_field() {
        assert_eq!(CellValue::from_field(""), CellValue::Missing);
        assert_eq!(CellValue::from_field("1,5"), CellValue::Number(1.5));
        assert_eq!(
            CellValue::from_field("hello"),
            CellValue::Text("hello".to_string())
        );
    }

    #[test]
    fn test_cell_serialization() {
        assert_eq!(serde_json::to_string(&CellValue::Missing).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&CellValue::Number(2.5)).unwrap(),
            "2.5"
        );
        assert_eq!(
            serde_json::to_string(&CellValue::Text("x".into())).unwrap(),
            "\"x\""
        );
    }
}
