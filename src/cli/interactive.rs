//! Line-oriented search loop for `tocsearch interactive`.
//!
//! Each line read from the input is one explicit submission. Blank
//! lines submit nothing. Load and search failures are printed and the
//! loop keeps reading, so a dataset fixed on disk is picked up by the
//! next query.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;

use crate::view::{evaluate, SearchForm};

const PROMPT: &str = "search> ";
const QUIT_COMMANDS: [&str; 2] = [":q", ":quit"];

/// Run the loop until end of input or a quit command.
///
/// When `prompt` is set, a prompt is written before every read.
pub fn run_loop<R, W>(input: R, out: &mut W, dataset: &Path, prompt: bool) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        if prompt {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let query = line.trim_end_matches(['\r', '\n']);

        if QUIT_COMMANDS.contains(&query.trim()) {
            break;
        }

        let outcome = evaluate(&SearchForm::submit(query), dataset);
        if outcome.is_error() {
            tracing::warn!(query, "search failed");
        }
        write!(out, "{outcome}")?;
        out.flush()?;
    }

    Ok(())
}
