//! A generic in-memory list with index-based CRUD.

use parking_lot::RwLock;
use std::sync::Arc;

use crudkit_core::{
    error::{StoreError, StoreResult},
    store::IndexedStore,
};

/// Thread-safe, ordered, growable list of items addressed by position.
///
/// Like [`JsonStore`](crate::JsonStore), the list is a cheap handle around
/// shared state: clones operate on the same items. Positional operations are
/// bounds-checked and fail with
/// [`IndexOutOfRange`](crudkit_core::error::StoreError::IndexOutOfRange)
/// rather than panicking.
///
/// Beyond the [`IndexedStore`] contract, the list offers predicate-based
/// lookup helpers used by the typed registries built on top of it.
#[derive(Debug)]
pub struct InMemoryList<T> {
    items: Arc<RwLock<Vec<T>>>,
}

impl<T> InMemoryList<T> {
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Default for InMemoryList<T> {
    fn default() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T> Clone for InMemoryList<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T: Clone> InMemoryList<T> {
    /// Returns a clone of the first item matching the predicate.
    pub fn find<P>(&self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items
            .read()
            .iter()
            .find(|item| predicate(item))
            .cloned()
    }

    /// Reports whether any item matches the predicate.
    pub fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.read().iter().any(|item| predicate(item))
    }

    /// Returns the position of the first item matching the predicate.
    pub fn position<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.read().iter().position(|item| predicate(item))
    }

    /// Returns clones of all items matching the predicate, in order.
    pub fn filter<P>(&self, mut predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items
            .read()
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }
}

impl<T: Clone + Send + Sync> IndexedStore<T> for InMemoryList<T> {
    fn create(&self, item: T) -> StoreResult<()> {
        self.items.write().push(item);
        Ok(())
    }

    fn read_all(&self) -> StoreResult<Vec<T>> {
        Ok(self.items.read().clone())
    }

    fn update(&self, index: usize, item: T) -> StoreResult<()> {
        let mut items = self.items.write();
        let len = items.len();
        match items.get_mut(index) {
            Some(slot) => {
                *slot = item;
                Ok(())
            }
            None => Err(StoreError::IndexOutOfRange { index, len }),
        }
    }

    fn delete(&self, index: usize) -> StoreResult<()> {
        let mut items = self.items.write();
        if index >= items.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: items.len(),
            });
        }
        items.remove(index);
        Ok(())
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.items.read().len())
    }
}
