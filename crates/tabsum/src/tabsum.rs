//! Main Analyzer struct and public API.

use std::path::Path;

use crate::error::{Result, TabsumError};
use crate::inference::infer_column_types;
use crate::input::{decode_text, detect_delimiter, Parser, ParserConfig};
use crate::report::{AnalysisResult, MAX_PREVIEW_ROWS};
use crate::stats::compute_stats;

/// Configuration for an analysis run.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Cap on the number of preview rows.
    pub preview_rows: usize,
    /// Maximum accepted upload size in bytes (None = unlimited).
    ///
    /// Oversized input is rejected, never truncated.
    pub max_bytes: Option<usize>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            preview_rows: MAX_PREVIEW_ROWS,
            max_bytes: None,
        }
    }
}

/// The analysis pipeline: sniff, parse, infer, aggregate, assemble.
///
/// An `Analyzer` holds only immutable configuration; each call operates on
/// its own table, so concurrent invocations share no mutable state.
pub struct Analyzer {
    config: AnalyzerConfig,
    parser: Parser,
}

impl Analyzer {
    /// Create a new analyzer with default configuration.
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Create an analyzer with custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        Self { config, parser }
    }

    /// Analyze an uploaded file.
    ///
    /// The caller is expected to have checked the extension already; the
    /// check is repeated here so the pipeline never ingests a payload the
    /// upload boundary should have rejected.
    pub fn analyze_bytes(&self, filename: &str, bytes: &[u8]) -> Result<AnalysisResult> {
        if !has_csv_extension(filename) {
            return Err(TabsumError::UnsupportedFileType(format!(
                "expected a .csv file, got '{}'",
                filename
            )));
        }

        if let Some(limit) = self.config.max_bytes {
            if bytes.len() > limit {
                return Err(TabsumError::FileTooLarge {
                    size: bytes.len(),
                    limit,
                });
            }
        }

        if bytes.is_empty() {
            return Err(TabsumError::EmptyFile("upload is empty".to_string()));
        }

        let text = decode_text(bytes)?;

        let delimiter = match self.config.parser.delimiter {
            Some(d) => d,
            None => detect_delimiter(&text),
        };

        let table = self.parser.parse_text(&text, delimiter)?;
        let types = infer_column_types(&table);
        let stats = compute_stats(&table, &types.numeric);

        Ok(AnalysisResult::assemble(
            filename,
            &table,
            types,
            stats,
            self.config.preview_rows,
        ))
    }

    /// Analyze a file on disk, using its file name for the report.
    pub fn analyze_file(&self, path: impl AsRef<Path>) -> Result<AnalysisResult> {
        let path = path.as_ref();

        let bytes = std::fs::read(path).map_err(|e| TabsumError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let filename = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.analyze_bytes(&filename, &bytes)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Check for a `.csv` extension, ASCII case-insensitive.
fn has_csv_extension(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}
