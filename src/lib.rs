//! Diacritic-insensitive search over a spreadsheet-backed
//! table-of-contents index.
//!
//! The library exposes the two core operations, [`dataset::load`] and
//! [`search::engine::search`], plus the CLI, page state and HTTP server
//! built on top of them.

pub mod cli;
pub mod dataset;
pub mod error;
pub mod models;
pub mod search;
pub mod server;
pub mod view;

pub use error::{DataLoadError, Error, SearchError};
