//! Loading spreadsheets into memory, once per path.
//!
//! A [`TableCache`] memoizes successful loads as shared, immutable
//! `Arc<Table>` snapshots. Failed loads are not remembered, so the next
//! request for the same path reads the file again. The process-wide
//! cache behind [`load`] lives until the process exits.

mod workbook;

pub use workbook::read_table;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use crate::error::DataLoadError;
use crate::models::Table;

/// Memoizes loaded tables keyed by the path they were read from.
#[derive(Debug, Default)]
pub struct TableCache {
    tables: Mutex<HashMap<PathBuf, Arc<Table>>>,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached table for `path`, reading it on first use.
    pub fn load(&self, path: &Path) -> Result<Arc<Table>, DataLoadError> {
        self.load_with(path, read_table)
    }

    /// Like [`TableCache::load`], with a caller-supplied reader.
    ///
    /// The lock is held across the read so concurrent first requests
    /// for the same path read the file once.
    pub fn load_with<F>(&self, path: &Path, read: F) -> Result<Arc<Table>, DataLoadError>
    where
        F: FnOnce(&Path) -> Result<Table, DataLoadError>,
    {
        let mut tables = self
            .tables
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(table) = tables.get(path) {
            tracing::debug!(path = %path.display(), "dataset cache hit");
            return Ok(Arc::clone(table));
        }

        match read(path) {
            Ok(table) => {
                tracing::info!(
                    path = %path.display(),
                    columns = table.columns.len(),
                    rows = table.len(),
                    "loaded dataset"
                );
                let table = Arc::new(table);
                tables.insert(path.to_path_buf(), Arc::clone(&table));
                Ok(table)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to load dataset");
                Err(err)
            }
        }
    }

    /// Whether a table for `path` is currently cached.
    #[cfg(test)]
    pub(crate) fn contains(&self, path: &Path) -> bool {
        self.tables
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains_key(path)
    }
}

fn global_cache() -> &'static TableCache {
    static CACHE: OnceLock<TableCache> = OnceLock::new();
    CACHE.get_or_init(TableCache::new)
}

/// Load the spreadsheet at `path` through the process-wide cache.
pub fn load(path: &Path) -> Result<Arc<Table>, DataLoadError> {
    global_cache().load(path)
}
