//! Shared, immutable item collections.
//!
//! A [`Collection`] is the data source handed to the list. Cloning it copies a
//! reference, never the items. Updates build a new collection in which every
//! untouched item is still the same `Arc`, which is what lets the list skip
//! re-rendering rows whose record did not change.

use std::collections::HashMap;
use std::ops::Deref;
use std::sync::Arc;

use crate::error::{FlatListError, Result};

/// An ordered, reference-counted sequence of items.
///
/// # Examples
///
/// ```
/// use bubbletea_flatlist::flatlist::Collection;
///
/// let data = Collection::new(vec!["a", "b", "c"]);
/// let updated = data.with_replaced(1, "B");
///
/// assert!(!Collection::ptr_eq(&data, &updated));
/// assert!(std::sync::Arc::ptr_eq(data.item(0).unwrap(), updated.item(0).unwrap()));
/// assert_eq!(*updated[1], "B");
/// ```
#[derive(Debug)]
pub struct Collection<I> {
    items: Arc<[Arc<I>]>,
}

impl<I> Clone for Collection<I> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<I> Default for Collection<I> {
    fn default() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }
}

impl<I> Collection<I> {
    /// Wraps owned items into a new collection.
    pub fn new(items: Vec<I>) -> Self {
        Self::from_shared(items.into_iter().map(Arc::new).collect())
    }

    /// Builds a collection from items that are already shared.
    ///
    /// Items passed here keep their identity, so rows cached for them are
    /// reused by the list.
    pub fn from_shared(items: Vec<Arc<I>>) -> Self {
        Self {
            items: Arc::from(items),
        }
    }

    /// Returns true if both collections are the same allocation.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.items, &b.items)
    }

    /// The shared item at `index`, if any.
    pub fn item(&self, index: usize) -> Option<&Arc<I>> {
        self.items.get(index)
    }

    /// All items as shared references.
    pub fn shared_items(&self) -> &[Arc<I>] {
        &self.items
    }

    /// Returns a new collection with `index` replaced by `item`.
    ///
    /// An out-of-range index returns an unchanged copy of the reference.
    pub fn with_replaced(&self, index: usize, item: I) -> Self {
        if index >= self.items.len() {
            return self.clone();
        }
        let mut items = self.items.to_vec();
        items[index] = Arc::new(item);
        Self::from_shared(items)
    }

    /// Returns a new collection with `item` inserted at `index` (clamped to the end).
    pub fn with_inserted(&self, index: usize, item: I) -> Self {
        let mut items = self.items.to_vec();
        items.insert(index.min(items.len()), Arc::new(item));
        Self::from_shared(items)
    }

    /// Returns a new collection without the item at `index`.
    pub fn with_removed(&self, index: usize) -> Self {
        if index >= self.items.len() {
            return self.clone();
        }
        let mut items = self.items.to_vec();
        items.remove(index);
        Self::from_shared(items)
    }

    /// Verifies that `key_of` yields a distinct key for every item.
    ///
    /// Returns the first duplicate found, in collection order.
    pub fn check_unique_keys<F>(&self, key_of: F) -> Result<()>
    where
        F: Fn(&I) -> String,
    {
        let mut seen: HashMap<String, usize> = HashMap::with_capacity(self.items.len());
        for (index, item) in self.items.iter().enumerate() {
            let key = key_of(&**item);
            if let Some(&first) = seen.get(&key) {
                return Err(FlatListError::DuplicateKey {
                    key,
                    first,
                    second: index,
                });
            }
            seen.insert(key, index);
        }
        Ok(())
    }
}

impl<I> Deref for Collection<I> {
    type Target = [Arc<I>];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<I> FromIterator<I> for Collection<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self::from_shared(iter.into_iter().map(Arc::new).collect())
    }
}

impl<I> From<Vec<I>> for Collection<I> {
    fn from(items: Vec<I>) -> Self {
        Self::new(items)
    }
}
