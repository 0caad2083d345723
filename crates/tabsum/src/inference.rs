//! Column type inference.

use serde::{Deserialize, Serialize};

use crate::input::{CellValue, Table};

/// Inferred data type for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dtype {
    /// Every non-missing value parses as a number.
    Numeric,
    /// Everything else, including columns with no values at all.
    Text,
}

/// Name and inferred type of a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    /// Column name.
    pub name: String,
    /// Inferred data type.
    pub dtype: Dtype,
}

/// Per-column types plus the numeric subset in first-seen order.
#[derive(Debug, Clone)]
pub struct ColumnTypes {
    /// One entry per column, in header order.
    pub columns: Vec<ColumnInfo>,
    /// Names of numeric columns, in header order.
    pub numeric: Vec<String>,
}

/// Classify every column of a table.
///
/// A column is numeric only if all of its non-missing cells carry numbers
/// and at least one such cell exists; a column of nothing but missing
/// values is text, so it never produces vacuous statistics. Never fails.
pub fn infer_column_types(table: &Table) -> ColumnTypes {
    let mut columns = Vec::with_capacity(table.column_count());
    let mut numeric = Vec::new();

    for (idx, name) in table.headers.iter().enumerate() {
        let mut non_missing = 0usize;
        let mut all_numbers = true;

        for cell in table.column_values(idx) {
            match cell {
                CellValue::Missing => {}
                CellValue::Number(_) => non_missing += 1,
                CellValue::Text(_) => {
                    non_missing += 1;
                    all_numbers = false;
                }
            }
        }

        let dtype = if non_missing > 0 && all_numbers {
            Dtype::Numeric
        } else {
            Dtype::Text
        };

        if dtype == Dtype::Numeric {
            numeric.push(name.clone());
        }
        columns.push(ColumnInfo {
            name: name.clone(),
            dtype,
        });
    }

    ColumnTypes { columns, numeric }
}
