//! Table parser for delimited text.

use std::collections::HashMap;

use crate::error::{Result, TabsumError};

use super::table::{CellValue, Table};

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            quote: b'"',
        }
    }
}

/// Parses decoded text into a [`Table`].
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse text with the given delimiter.
    ///
    /// The first non-empty line is the header. Short rows are padded with
    /// missing cells and long rows truncated to the header width, so every
    /// returned row shares exactly the header's column set.
    pub fn parse_text(&self, text: &str, delimiter: u8) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(text.as_bytes());

        let raw_headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();

        if raw_headers.is_empty() || raw_headers.iter().all(|h| h.trim().is_empty()) {
            return Err(TabsumError::MalformedHeader(
                "header line is empty".to_string(),
            ));
        }

        let headers = disambiguate_headers(&raw_headers);
        let expected_cols = headers.len();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row: Vec<CellValue> =
                record.iter().map(CellValue::from_field).collect();

            // Pad short rows, truncate long ones.
            while row.len() < expected_cols {
                row.push(CellValue::Missing);
            }
            row.truncate(expected_cols);

            rows.push(row);
        }

        if rows.is_empty() {
            return Err(TabsumError::EmptyFile(
                "no data rows after the header".to_string(),
            ));
        }

        Ok(Table::new(headers, rows, delimiter))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace empty header names and deduplicate repeated ones.
///
/// Empty names become `column_{position}`; a repeated name gets a
/// deterministic `_{k}` suffix, counting from 2.
fn disambiguate_headers(raw: &[String]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut headers = Vec::with_capacity(raw.len());

    for (idx, name) in raw.iter().enumerate() {
        let trimmed = name.trim();
        let base = if trimmed.is_empty() {
            format!("column_{}", idx + 1)
        } else {
            trimmed.to_string()
        };

        let count = seen.entry(base.clone()).or_insert(0);
        *count += 1;

        let unique = if *count == 1 {
            base
        } else {
            let mut k = *count;
            loop {
                let candidate = format!("{}_{}", base, k);
                if !seen.contains_key(&candidate) {
                    seen.insert(candidate.clone(), 1);
                    break candidate;
                }
                k += 1;
            }
        };

        headers.push(unique);
    }

    headers
}
