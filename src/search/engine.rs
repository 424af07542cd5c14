//! Core search entry points.
//!
//! [`search`] is the pure table scan; [`run_search`] wires it to the
//! cached dataset loader and produces the serializable result used by
//! every front end.

use crate::dataset;
use crate::error::{Error, SearchError};
use crate::models::{
    CellValue, ResultRow, SearchConfig, SearchResult, SearchSummary, Table,
    SEARCH_RESULT_VERSION,
};
use crate::search::normalize::normalize;

/// Hard cap on the number of rows a search returns.
pub const MAX_RESULTS: usize = 100;

/// A matching table row, borrowed from the table it was found in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedRow<'a> {
    /// 1-based position in the result list.
    pub rank: usize,
    /// 0-based position in the table.
    pub index: usize,
    pub cells: &'a [CellValue],
}

/// Matching rows in table order, at most [`MAX_RESULTS`] of them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet<'a> {
    pub rows: Vec<RankedRow<'a>>,
}

impl<'a> ResultSet<'a> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Find the rows of `table` whose cells contain `query`.
///
/// Query and cells are compared after [`normalize`]; a row matches when
/// the normalized query is a literal substring of any of its cells.
/// An absent or empty query yields an empty result.
pub fn search<'a>(table: &'a Table, query: Option<&str>) -> Result<ResultSet<'a>, SearchError> {
    let Some(query) = query.filter(|q| !q.is_empty()) else {
        return Ok(ResultSet::default());
    };

    let needle = normalize(query);
    if needle.is_empty() {
        return Ok(ResultSet::default());
    }

    let expected = table.columns.len();
    let mut rows = Vec::new();

    for (index, cells) in table.rows.iter().enumerate() {
        if cells.len() != expected {
            return Err(SearchError::MalformedRow {
                row: index,
                expected,
                found: cells.len(),
            });
        }

        if !row_matches(cells, &needle) {
            continue;
        }

        rows.push(RankedRow {
            rank: rows.len() + 1,
            index,
            cells: cells.as_slice(),
        });

        if rows.len() >= MAX_RESULTS {
            break;
        }
    }

    tracing::debug!(query, needle = %needle, results = rows.len(), "search finished");

    Ok(ResultSet { rows })
}

fn row_matches(cells: &[CellValue], needle: &str) -> bool {
    cells
        .iter()
        .filter(|cell| !cell.is_empty())
        .any(|cell| normalize(&cell.to_string()).contains(needle))
}

/// Build the serializable form of a result set.
pub fn to_search_result(table: &Table, query: &str, set: &ResultSet<'_>) -> SearchResult {
    let rows = set
        .rows
        .iter()
        .map(|row| ResultRow {
            rank: row.rank,
            row: row.index,
            values: row.cells.iter().map(|cell| cell.to_string()).collect(),
        })
        .collect::<Vec<_>>();

    SearchResult {
        version: SEARCH_RESULT_VERSION.to_string(),
        query: query.to_string(),
        columns: table.columns.clone(),
        summary: SearchSummary {
            total_results: rows.len(),
        },
        rows,
    }
}

/// Load the configured dataset (through the process-wide cache) and
/// search it.
pub fn run_search(config: &SearchConfig) -> Result<SearchResult, Error> {
    let table = dataset::load(&config.dataset)?;
    let query = config.query.as_deref();
    let set = search(&table, query)?;
    Ok(to_search_result(&table, query.unwrap_or_default(), &set))
}
