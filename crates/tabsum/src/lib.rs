//! Tabsum: tabular ingestion and descriptive statistics for uploaded
//! delimited files.
//!
//! Tabsum turns a raw upload of unknown dialect into a typed table, infers
//! per-column types, computes count/min/max/mean/sum over numeric columns,
//! and packages the result with a bounded row preview — one synchronous
//! pass per request, nothing persisted.
//!
//! # Pipeline
//!
//! upload bytes → decode + delimiter sniffing → [`Table`] → column type
//! inference → per-column statistics → [`AnalysisResult`]
//!
//! # Example
//!
//! ```
//! use tabsum::Analyzer;
//!
//! let analyzer = Analyzer::new();
//! let result = analyzer.analyze_bytes("data.csv", b"a,b\n1,x\n2,y\n").unwrap();
//!
//! assert_eq!(result.rows, 2);
//! assert_eq!(result.numeric_columns, vec!["a"]);
//! ```

pub mod error;
pub mod inference;
pub mod input;
pub mod report;
pub mod stats;

mod tabsum;

pub use crate::tabsum::{Analyzer, AnalyzerConfig};
pub use error::{Result, TabsumError};
pub use inference::{ColumnInfo, ColumnTypes, Dtype};
pub use input::{CellValue, Parser, ParserConfig, Table};
pub use report::{AnalysisResult, MAX_PREVIEW_ROWS};
pub use stats::ColumnStats;
