//! Shared data models for tables, search configs and results.
//!
//! `SearchResult` and friends form the JSON API surface used by the
//! CLI (`--format json`) and the HTTP server.

use std::fmt;
use std::path::PathBuf;

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Schema version for `SearchResult` JSON payloads.
///
/// This version follows semver semantics (MAJOR.MINOR.PATCH):
/// - MAJOR: Breaking changes to required fields or field semantics.
/// - MINOR: Backward-compatible additions (new optional fields).
/// - PATCH: Documentation or internal changes only.
pub const SEARCH_RESULT_VERSION: &str = "1.0.0";

/// Dataset read when no path is configured.
pub const DEFAULT_DATASET: &str = "photo_antiquaria_index.xlsx";

/// A single spreadsheet cell, kept in its natural scalar type.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    Empty,
}

impl CellValue {
    /// Whether the cell holds no value.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

/// Textual form used both for matching and for display.
///
/// Missing values render as the empty string, so they never match a
/// query such as `nan` or `none`.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(v) => {
                // Spreadsheets store issue numbers as floats; show 125, not 125.0.
                if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
                    write!(f, "{}", *v as i64)
                } else {
                    write!(f, "{v}")
                }
            }
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::DateTime(dt) => {
                if dt.time() == NaiveTime::MIN {
                    write!(f, "{}", dt.format("%Y-%m-%d"))
                } else {
                    write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S"))
                }
            }
            CellValue::Empty => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

/// In-memory representation of the first worksheet of a spreadsheet.
///
/// Every row is expected to hold exactly one cell per column. Tables
/// produced by the loader always satisfy this; the search engine
/// reports rows that do not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Configuration for a single search invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Raw user query. `None` and `Some("")` both mean "no search".
    #[serde(default)]
    pub query: Option<String>,
    /// Spreadsheet to search.
    pub dataset: PathBuf,
}

/// Request body accepted by `POST /v1/search`.
///
/// The server always searches its own configured dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,
}

/// One ranked result row with its values stringified in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    /// 1-based position in the result list.
    pub rank: usize,
    /// 0-based position of the row in the source table.
    pub row: usize,
    pub values: Vec<String>,
}

impl ResultRow {
    /// `"<rank>. <v1> | <v2> | ..."`
    pub fn display_line(&self) -> String {
        format!("{}. {}", self.rank, self.values.join(" | "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSummary {
    /// Number of rows returned (never more than the result cap).
    pub total_results: usize,
}

/// Serializable outcome of one search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub version: String,
    pub query: String,
    pub columns: Vec<String>,
    pub rows: Vec<ResultRow>,
    pub summary: SearchSummary,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn integral_floats_render_without_fraction() {
        assert_eq!(CellValue::Float(125.0).to_string(), "125");
        assert_eq!(CellValue::Float(12.5).to_string(), "12.5");
        assert_eq!(CellValue::Int(-3).to_string(), "-3");
    }

    #[test]
    fn empty_cells_render_as_empty_string() {
        assert_eq!(CellValue::Empty.to_string(), "");
        assert!(CellValue::Empty.is_empty());
        assert!(!CellValue::from("").is_empty());
    }

    #[test]
    fn dates_drop_midnight_time() {
        let date = NaiveDate::from_ymd_opt(1998, 3, 1).expect("date");
        let midnight = date.and_hms_opt(0, 0, 0).expect("time");
        let afternoon = date.and_hms_opt(14, 30, 5).expect("time");

        assert_eq!(CellValue::DateTime(midnight).to_string(), "1998-03-01");
        assert_eq!(
            CellValue::DateTime(afternoon).to_string(),
            "1998-03-01 14:30:05"
        );
    }

    #[test]
    fn display_line_joins_values_with_pipes() {
        let row = ResultRow {
            rank: 1,
            row: 0,
            values: vec!["125".to_string(), "Die Leica M3".to_string()],
        };
        assert_eq!(row.display_line(), "1. 125 | Die Leica M3");
    }
}
