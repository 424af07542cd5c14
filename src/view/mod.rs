//! Page state shared by the interactive loop, the CLI and the HTML page.
//!
//! A search runs only after an explicit submission carrying a
//! non-empty query. Until then the page is [`Outcome::Idle`].

use std::fmt;
use std::path::Path;

use crate::error::Error;
use crate::models::{SearchConfig, SearchResult};
use crate::search::engine;

/// What the user has typed and whether they pressed "search".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub query: Option<String>,
    pub submitted: bool,
}

impl SearchForm {
    pub fn submit(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            submitted: true,
        }
    }

    /// The query to run, if the form was submitted with a non-empty one.
    pub fn submitted_query(&self) -> Option<&str> {
        if !self.submitted {
            return None;
        }
        self.query.as_deref().filter(|q| !q.is_empty())
    }
}

/// What the page shows after evaluating a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing submitted yet.
    Idle,
    Results(SearchResult),
    NoResults,
    LoadFailed(String),
    SearchFailed(String),
}

impl Outcome {
    /// Map a search attempt to what the user sees.
    pub fn from_search(result: Result<SearchResult, Error>) -> Self {
        match result {
            Ok(result) if result.is_empty() => Outcome::NoResults,
            Ok(result) => Outcome::Results(result),
            Err(Error::Load(err)) => Outcome::LoadFailed(err.to_string()),
            Err(Error::Search(err)) => Outcome::SearchFailed(err.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::LoadFailed(_) | Outcome::SearchFailed(_))
    }
}

/// Evaluate `form` against the dataset at `dataset`.
///
/// The dataset is only touched once a query has been submitted.
pub fn evaluate(form: &SearchForm, dataset: &Path) -> Outcome {
    let Some(query) = form.submitted_query() else {
        return Outcome::Idle;
    };

    let config = SearchConfig {
        query: Some(query.to_string()),
        dataset: dataset.to_path_buf(),
    };
    Outcome::from_search(engine::run_search(&config))
}

/// `Found 1 result` / `Found 12 results`
pub fn found_message(count: usize) -> String {
    if count == 1 {
        "Found 1 result".to_string()
    } else {
        format!("Found {count} results")
    }
}

pub const NO_RESULTS_MESSAGE: &str = "No results found.";

/// User-facing message for a failed search.
pub fn error_message(err: &Error) -> String {
    match err {
        Error::Load(err) => load_failed_message(&err.to_string()),
        Error::Search(err) => search_failed_message(&err.to_string()),
    }
}

fn load_failed_message(reason: &str) -> String {
    format!("Failed to load data: {reason}")
}

fn search_failed_message(reason: &str) -> String {
    format!("An error occurred: {reason}")
}

/// Plain-text rendering used by the CLI and the interactive loop.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Idle => Ok(()),
            Outcome::Results(result) => {
                writeln!(f, "{}", found_message(result.rows.len()))?;
                for row in &result.rows {
                    writeln!(f, "{}", row.display_line())?;
                }
                Ok(())
            }
            Outcome::NoResults => writeln!(f, "{NO_RESULTS_MESSAGE}"),
            Outcome::LoadFailed(reason) => writeln!(f, "{}", load_failed_message(reason)),
            Outcome::SearchFailed(reason) => writeln!(f, "{}", search_failed_message(reason)),
        }
    }
}
