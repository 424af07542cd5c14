use std::cmp;
use std::io::Write;

use anyhow::Result;

use crate::models::SearchResult;
use crate::view::{Outcome, NO_RESULTS_MESSAGE};

/// Render a `SearchResult` in human-readable text form.
///
/// Results are rendered as a count line followed by one
/// `rank. value | value | ...` line per row; an empty result prints
/// the "no results" message instead.
pub fn print_text(result: &SearchResult) -> Result<()> {
    let stdout = std::io::stdout();
    write_text(&mut stdout.lock(), result)
}

pub(crate) fn write_text<W: Write>(out: &mut W, result: &SearchResult) -> Result<()> {
    let outcome = if result.is_empty() {
        Outcome::NoResults
    } else {
        Outcome::Results(result.clone())
    };
    write!(out, "{outcome}")?;
    Ok(())
}

/// Render a `SearchResult` as a simple table.
///
/// Columns are `#` followed by the dataset's own columns, each capped
/// at `MAX_CELL_WIDTH` characters.
pub fn print_table(result: &SearchResult) -> Result<()> {
    let stdout = std::io::stdout();
    write_table(&mut stdout.lock(), result)
}

pub(crate) fn write_table<W: Write>(out: &mut W, result: &SearchResult) -> Result<()> {
    if result.is_empty() {
        writeln!(out, "{NO_RESULTS_MESSAGE}")?;
        return Ok(());
    }

    const MAX_CELL_WIDTH: usize = 40;
    const RANK_HEADER: &str = "#";

    let rank_width = result
        .rows
        .iter()
        .map(|r| r.rank.to_string().len())
        .max()
        .unwrap_or(0)
        .max(RANK_HEADER.len());

    let widths: Vec<usize> = result
        .columns
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            let max_value = result
                .rows
                .iter()
                .map(|r| r.values.get(idx).map_or(0, |v| v.chars().count()))
                .max()
                .unwrap_or(0);
            cmp::min(
                cmp::max(header.chars().count(), max_value),
                MAX_CELL_WIDTH,
            )
        })
        .collect();

    let mut header = format!("{RANK_HEADER:>rank_width$}");
    for (column, width) in result.columns.iter().zip(&widths) {
        header.push(' ');
        header.push_str(&pad(&truncate(column, *width), *width));
    }
    writeln!(out, "{}", header.trim_end())?;

    for row in &result.rows {
        let mut line = format!("{:>rank_width$}", row.rank);
        for (idx, width) in widths.iter().enumerate() {
            let value = row.values.get(idx).map(String::as_str).unwrap_or("");
            line.push(' ');
            line.push_str(&pad(&truncate(value, *width), *width));
        }
        writeln!(out, "{}", line.trim_end())?;
    }

    Ok(())
}

fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    let mut padded = s.to_string();
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    padded
}

fn truncate(s: &str, max_width: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_width {
        s.to_string()
    } else if max_width <= 1 {
        "…".to_string()
    } else {
        s.chars()
            .take(max_width.saturating_sub(1))
            .collect::<String>()
            + "…"
    }
}
