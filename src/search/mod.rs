//! Core search engine module.
//!
//! This module hosts query/cell normalization and the table scan used
//! by the CLI, the interactive loop and the HTTP server.

pub mod engine;
pub mod normalize;

pub use engine::{run_search, search, RankedRow, ResultSet, MAX_RESULTS};
pub use normalize::normalize;
