//! Error types for loading the dataset and searching it.

use std::path::PathBuf;

/// Failure to turn a spreadsheet file into a [`crate::models::Table`].
///
/// Load failures are never cached: the next load of the same path
/// retries the read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataLoadError {
    /// The configured path does not exist.
    #[error("dataset not found at {}", .path.display())]
    NotFound { path: PathBuf },

    /// The file exists but is not a readable workbook.
    #[error("failed to open workbook {}: {reason}", .path.display())]
    Open { path: PathBuf, reason: String },

    /// The workbook contains no worksheet at all.
    #[error("workbook {} contains no worksheet", .path.display())]
    NoSheet { path: PathBuf },

    /// The first worksheet could not be decoded.
    #[error("failed to read first worksheet of {}: {reason}", .path.display())]
    Sheet { path: PathBuf, reason: String },

    /// The first worksheet has no header row.
    #[error("first worksheet of {} is empty", .path.display())]
    MissingHeader { path: PathBuf },
}

/// Failure while scanning an in-memory table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A row does not line up with the table's columns.
    #[error("row {row} has {found} cells but the table has {expected} columns")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Either half of a search request failing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] DataLoadError),

    #[error(transparent)]
    Search(#[from] SearchError),
}
