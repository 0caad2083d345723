//! Descriptive statistics over numeric columns.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::Table;

/// Aggregates for one numeric column.
///
/// All four aggregates are `None` exactly when `count` is zero. Values are
/// double precision; components that would overflow saturate to IEEE
/// infinities rather than aborting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    /// Number of non-missing values.
    pub count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub sum: Option<f64>,
}

impl ColumnStats {
    /// Stats for a column with no well-defined values.
    pub fn empty() -> Self {
        Self {
            count: 0,
            min: None,
            max: None,
            mean: None,
            sum: None,
        }
    }
}

/// Compute stats for each listed numeric column, in the given order.
///
/// Missing cells do not count; duplicates each count toward `count` while
/// `min`/`max` report the single extreme value. A single linear scan per
/// column, so identical tables always produce identical stats.
pub fn compute_stats(table: &Table, numeric_columns: &[String]) -> IndexMap<String, ColumnStats> {
    let mut stats = IndexMap::with_capacity(numeric_columns.len());

    for name in numeric_columns {
        let Some(idx) = table.column_index(name) else {
            continue;
        };

        let mut count = 0usize;
        let mut sum = 0.0f64;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for cell in table.column_values(idx) {
            if let Some(value) = cell.as_number() {
                count += 1;
                sum += value;
                if value < min {
                    min = value;
                }
                if value > max {
                    max = value;
                }
            }
        }

        let column_stats = if count == 0 {
            ColumnStats::empty()
        } else {
            ColumnStats {
                count,
                min: Some(min),
                max: Some(max),
                mean: Some(sum / count as f64),
                sum: Some(sum),
            }
        };

        stats.insert(name.clone(), column_stats);
    }

    stats
}
