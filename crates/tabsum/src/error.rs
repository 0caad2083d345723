//! Error types for the tabsum library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tabsum operations.
#[derive(Debug, Error)]
pub enum TabsumError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Upload does not carry a supported extension.
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// Bytes are not decodable as text.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// No data rows after the header.
    #[error("Empty file: {0}")]
    EmptyFile(String),

    /// Header line is empty or unusable.
    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    /// Upload exceeds the configured size limit.
    #[error("File too large: {size} bytes exceeds limit of {limit} bytes")]
    FileTooLarge { size: usize, limit: usize },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for tabsum operations.
pub type Result<T> = std::result::Result<T, TabsumError>;
