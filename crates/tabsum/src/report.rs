//! Assembly of the analysis report handed to the presentation layer.

use indexmap::IndexMap;
use serde::Serialize;

use crate::inference::{ColumnInfo, ColumnTypes};
use crate::input::{CellValue, Table};
use crate::stats::ColumnStats;

/// Default cap on the number of preview rows.
pub const MAX_PREVIEW_ROWS: usize = 20;

/// Result of analyzing an uploaded file.
///
/// This is the single data shape exposed to the presentation layer; it is
/// handed off by value and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Declared name of the uploaded file.
    pub filename: String,
    /// Number of data rows (excluding header).
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Name and inferred type per column, in header order.
    pub columns: Vec<ColumnInfo>,
    /// Names of numeric columns, in header order.
    pub numeric_columns: Vec<String>,
    /// Aggregates keyed by numeric column name, same order as
    /// `numeric_columns`.
    pub stats: IndexMap<String, ColumnStats>,
    /// First rows of the table, missing cells rendered as JSON null.
    pub preview: Vec<IndexMap<String, CellValue>>,
}

impl AnalysisResult {
    /// Package the pipeline outputs into one report.
    pub fn assemble(
        filename: &str,
        table: &Table,
        types: ColumnTypes,
        stats: IndexMap<String, ColumnStats>,
        preview_rows: usize,
    ) -> Self {
        let preview = table
            .rows
            .iter()
            .take(preview_rows)
            .map(|row| {
                table
                    .headers
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect()
            })
            .collect();

        Self {
            filename: filename.to_string(),
            rows: table.row_count(),
            cols: table.column_count(),
            columns: types.columns,
            numeric_columns: types.numeric,
            stats,
            preview,
        }
    }
}
