//! Keyed row memoization.
//!
//! Rows are cached by item key together with the `Arc` of the item they were
//! rendered from. A lookup is a hit only when the current item is the very same
//! allocation (`Arc::ptr_eq`) and the width did not change, so replacing a
//! record re-renders exactly its row while moving records around does not.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

struct CachedRow<I> {
    item: Arc<I>,
    width: usize,
    lines: Vec<String>,
}

/// Rendered rows keyed by item key.
pub(super) struct RowCache<I> {
    rows: HashMap<String, CachedRow<I>>,
}

impl<I> Default for RowCache<I> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }
}

impl<I> RowCache<I> {
    /// Returns the cached lines for `key`, rendering them on a miss.
    ///
    /// The second value is true for a cache hit.
    pub fn get_or_render<F>(&mut self, key: &str, item: &Arc<I>, width: usize, render: F) -> (&[String], bool)
    where
        F: FnOnce() -> Vec<String>,
    {
        let hit = self
            .rows
            .get(key)
            .is_some_and(|row| row.width == width && Arc::ptr_eq(&row.item, item));

        if !hit {
            self.rows.insert(
                key.to_string(),
                CachedRow {
                    item: Arc::clone(item),
                    width,
                    lines: render(),
                },
            );
        }

        // Present in both branches: either hit or inserted above.
        let lines = self.rows.get(key).map(|row| row.lines.as_slice()).unwrap_or(&[]);
        (lines, hit)
    }

    /// Drops every row whose key is not in `keep`.
    pub fn retain(&mut self, keep: &HashSet<String>) {
        self.rows.retain(|key, _| keep.contains(key));
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
