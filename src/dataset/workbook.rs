//! Spreadsheet decoding via `calamine`.
//!
//! Only the first worksheet is read. Its first row becomes the
//! column header; every following non-blank row becomes a table row.
//! Columns are numbered from column A even when the leading columns
//! are blank.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};

use crate::error::DataLoadError;
use crate::models::{CellValue, Table};

/// Read the first worksheet of the workbook at `path` into a `Table`.
///
/// The workbook (and with it the file handle) is dropped before this
/// function returns, on success and on every error path.
pub fn read_table(path: &Path) -> Result<Table, DataLoadError> {
    if !path.exists() {
        return Err(DataLoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let range = {
        let mut workbook = open_workbook_auto(path).map_err(|err| DataLoadError::Open {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

        workbook
            .worksheet_range_at(0)
            .ok_or_else(|| DataLoadError::NoSheet {
                path: path.to_path_buf(),
            })?
            .map_err(|err| DataLoadError::Sheet {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })?
    };

    table_from_range(path, &range)
}

fn table_from_range(path: &Path, range: &Range<Data>) -> Result<Table, DataLoadError> {
    // `Range` begins at the first used cell; blank leading columns still count.
    let offset = range.start().map_or(0, |(_, col)| col as usize);
    let mut rows = range.rows();

    let header = rows.next().ok_or_else(|| DataLoadError::MissingHeader {
        path: path.to_path_buf(),
    })?;
    let header: Vec<Data> = std::iter::repeat(Data::Empty)
        .take(offset)
        .chain(header.iter().cloned())
        .collect();
    let columns = column_names(&header);
    if columns.is_empty() {
        return Err(DataLoadError::MissingHeader {
            path: path.to_path_buf(),
        });
    }

    let width = columns.len();
    let mut table_rows = Vec::new();
    for raw in rows {
        let mut row: Vec<CellValue> = std::iter::repeat(CellValue::Empty)
            .take(offset)
            .chain(raw.iter().map(cell_value))
            .take(width)
            .collect();
        if row.iter().all(CellValue::is_empty) {
            continue;
        }
        row.resize(width, CellValue::Empty);
        table_rows.push(row);
    }

    Ok(Table::new(columns, table_rows))
}

/// Derive unique column names from the header row.
///
/// Blank headers become `Unnamed: <index>`; repeated names get the
/// next `.<n>` suffix that is not already taken.
pub(crate) fn column_names(header: &[Data]) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut used: HashSet<String> = HashSet::new();
    let mut names = Vec::with_capacity(header.len());

    for (idx, cell) in header.iter().enumerate() {
        let raw = cell_value(cell).to_string();
        let base = if raw.trim().is_empty() {
            format!("Unnamed: {idx}")
        } else {
            raw
        };

        let count = counts.entry(base.clone()).or_insert(0);
        let mut name = base.clone();
        while used.contains(&name) {
            *count += 1;
            name = format!("{base}.{count}");
        }
        used.insert(name.clone());
        names.push(name);
    }

    names
}

pub(crate) fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(value) => CellValue::DateTime(value),
            None => CellValue::Float(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(err) => CellValue::Text(err.to_string()),
        Data::Empty => CellValue::Empty,
    }
}
