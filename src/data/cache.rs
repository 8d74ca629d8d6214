//! Table Cache
//! Load-once holder for the review table shared by every view.

use crate::data::loader::LoaderError;
use crate::data::review::ReviewTable;
use std::path::Path;
use std::sync::Arc;

/// Memoized review table. Only [`TableCache::reload`] and
/// [`TableCache::replace`] ever swap the table after the first load.
#[derive(Default)]
pub struct TableCache {
    table: Option<Arc<ReviewTable>>,
    loads: usize,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only accessor.
    pub fn get(&self) -> Option<Arc<ReviewTable>> {
        self.table.clone()
    }

    /// Return the cached table, running `init` only when nothing is cached yet.
    pub fn get_or_init<F>(&mut self, source: &Path, init: F) -> Result<Arc<ReviewTable>, LoaderError>
    where
        F: FnOnce(&Path) -> Result<ReviewTable, LoaderError>,
    {
        if let Some(table) = &self.table {
            tracing::debug!(source = %table.source().display(), "review table cache hit");
            return Ok(Arc::clone(table));
        }
        self.reload(source, init)
    }

    /// Always run `init`. On failure the previous table stays cached.
    pub fn reload<F>(&mut self, source: &Path, init: F) -> Result<Arc<ReviewTable>, LoaderError>
    where
        F: FnOnce(&Path) -> Result<ReviewTable, LoaderError>,
    {
        let table = init(source)?;
        Ok(self.replace(table))
    }

    /// Install a table produced elsewhere (the background loader).
    pub fn replace(&mut self, table: ReviewTable) -> Arc<ReviewTable> {
        let table = Arc::new(table);
        self.table = Some(Arc::clone(&table));
        self.loads += 1;
        table
    }

    /// Number of tables installed over the cache's lifetime.
    pub fn loads(&self) -> usize {
        self.loads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::review::{sample_review, LoadReport};
    use std::cell::Cell;

    fn table_with(n: usize) -> ReviewTable {
        let reviews = (0..n).map(|i| sample_review(&format!("u{i}"), 5, "ok")).collect();
        ReviewTable::new(reviews, "reviews.csv", LoadReport::default())
    }

    #[test]
    fn test_get_or_init_runs_loader_once() {
        let calls = Cell::new(0);
        let mut cache = TableCache::new();
        assert!(cache.get().is_none());

        let first = cache
            .get_or_init(Path::new("reviews.csv"), |_| {
                calls.set(calls.get() + 1);
                Ok(table_with(2))
            })
            .unwrap();
        let second = cache
            .get_or_init(Path::new("reviews.csv"), |_| {
                calls.set(calls.get() + 1);
                Ok(table_with(5))
            })
            .unwrap();

        assert_eq!(calls.get(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 2);
        assert_eq!(cache.loads(), 1);
    }

    #[test]
    fn test_reload_is_explicit() {
        let mut cache = TableCache::new();
        let first = cache
            .get_or_init(Path::new("reviews.csv"), |_| Ok(table_with(2)))
            .unwrap();
        let reloaded = cache
            .reload(Path::new("reviews.csv"), |_| Ok(table_with(3)))
            .unwrap();

        assert!(!Arc::ptr_eq(&first, &reloaded));
        assert_eq!(cache.get().unwrap().len(), 3);
        assert_eq!(cache.loads(), 2);
    }

    #[test]
    fn test_failed_reload_keeps_previous_table() {
        let mut cache = TableCache::new();
        cache.replace(table_with(4));

        let result = cache.reload(Path::new("gone.csv"), |p| {
            Err(LoaderError::NotFound(p.to_path_buf()))
        });

        assert!(result.is_err());
        assert_eq!(cache.get().unwrap().len(), 4);
    }

    #[test]
    fn test_failed_first_init_leaves_cache_empty() {
        let mut cache = TableCache::new();
        let result = cache.get_or_init(Path::new("gone.csv"), |p| {
            Err(LoaderError::NotFound(p.to_path_buf()))
        });
        assert!(result.is_err());
        assert!(cache.get().is_none());
        assert_eq!(cache.loads(), 0);
    }
}
