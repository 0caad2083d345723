//! Dialect sniffing: text decoding and delimiter detection.

use std::borrow::Cow;

use crate::error::{Result, TabsumError};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b',', b';', b'\t'];

/// Number of lines to sample when detecting the delimiter.
const SAMPLE_LINES: usize = 10;

/// Decode raw upload bytes as text.
///
/// Valid UTF-8 is used as-is; anything else is decoded as Windows-1252,
/// which covers the Latin-1 exports common in spreadsheet tools. Bytes
/// containing NUL are rejected as binary content.
pub fn decode_text(bytes: &[u8]) -> Result<String> {
    if bytes.contains(&0) {
        return Err(TabsumError::Encoding(
            "binary content is not decodable as text".to_string(),
        ));
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(text.to_string()),
        Err(_) => {
            let (decoded, _, had_errors) = encoding_rs::WINDOWS_1252.decode(bytes);
            if had_errors {
                return Err(TabsumError::Encoding(
                    "bytes are not valid UTF-8 or Windows-1252 text".to_string(),
                ));
            }
            Ok(match decoded {
                Cow::Borrowed(s) => s.to_string(),
                Cow::Owned(s) => s,
            })
        }
    }
}

/// Detect the delimiter by analyzing the first few non-empty lines.
///
/// The header line anchors the expected field count: candidates that split
/// the header are scored by how many sampled lines agree with it, and the
/// most consistent one wins (ties go to the wider split, then candidate
/// order). When no candidate splits the header the data is single-column;
/// the chosen delimiter is then one that leaves every sampled line whole,
/// so stray decimal commas in the data are not treated as field breaks.
/// Falls back to comma.
pub fn detect_delimiter(text: &str) -> u8 {
    let lines: Vec<&str> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(SAMPLE_LINES)
        .collect();

    let Some(header) = lines.first() else {
        return b',';
    };

    let mut best: Option<(u8, usize, usize)> = None;

    for &delim in DELIMITERS {
        let header_fields = count_fields_in_line(header, delim);
        if header_fields < 2 {
            continue;
        }

        let matching = lines
            .iter()
            .filter(|line| count_fields_in_line(line, delim) == header_fields)
            .count();

        let better = match best {
            None => true,
            Some((_, best_matching, best_fields)) => {
                matching > best_matching
                    || (matching == best_matching && header_fields > best_fields)
            }
        };
        if better {
            best = Some((delim, matching, header_fields));
        }
    }

    if let Some((delim, _, _)) = best {
        return delim;
    }

    for &delim in DELIMITERS {
        if lines
            .iter()
            .all(|line| count_fields_in_line(line, delim) == 1)
        {
            return delim;
        }
    }

    b','
}

/// Count fields a delimiter would produce for a line, respecting quotes.
fn count_fields_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 1;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}
