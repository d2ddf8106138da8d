//! The in-memory JSON document store.
//!
//! This module provides [`JsonStore`], the reference implementation of the
//! [`DocumentStore`] contract: an ordered, append-only collection of
//! normalized documents guarded by a read-write lock.

use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;

use crudkit_core::{
    document::Document,
    error::{StoreError, StoreResult},
    identity,
    normalize::normalize,
    store::DocumentStore,
};

type Documents = Vec<Document>;

/// Thread-safe in-memory document store keyed by embedded integer ids.
///
/// Every write payload passes through normalization before admission, so the
/// collection only ever holds documents with a canonical `id` field, unique
/// across the store, and no null-valued fields. Insertion order is preserved,
/// including across deletions.
///
/// # Thread Safety
///
/// `JsonStore` is cloneable and uses an `Arc`-wrapped internal state, so
/// clones share the same underlying collection. All operations take the lock
/// for their full duration; a failed `add` never leaves a partial write
/// behind.
///
/// # Performance
///
/// Identity lookups scan the collection linearly (no indexing), which is the
/// intended trade-off for small working sets.
///
/// # Example
///
/// ```ignore
/// use crudkit::{memory::JsonStore, store::DocumentStore};
/// use serde_json::json;
///
/// let store = JsonStore::new();
/// store.add(&json!({"id": 1, "name": "Alice"}))?;
///
/// assert!(store.search_by_id(1).is_some());
/// assert!(store.delete_by_id(1));
/// ```
#[derive(Default, Clone, Debug)]
pub struct JsonStore {
    documents: Arc<RwLock<Documents>>,
}

impl JsonStore {
    /// Creates a new empty document store.
    pub fn new() -> Self {
        Self {
            documents: Arc::new(RwLock::new(Documents::new())),
        }
    }

    /// Number of documents currently stored.
    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    /// Reports whether the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}

impl DocumentStore for JsonStore {
    fn add(&self, record: &Value) -> StoreResult<()> {
        if record.is_null() {
            return Err(StoreError::NullInput);
        }
        // Creation requires the raw input to present its identity up front;
        // a record that merely survives normalization is not enough.
        if !record.as_object().is_some_and(identity::has_scalar_id) {
            return Err(StoreError::MissingIdentity);
        }
        let normalized = normalize(record)
            .ok_or_else(|| StoreError::InvalidDocument("record has no usable fields".to_string()))?;
        let id = normalized.id().ok_or(StoreError::MissingIdentity)?;

        let mut documents = self.documents.write();
        if documents.iter().any(|doc| doc.id() == Some(id)) {
            return Err(StoreError::DuplicateIdentity(id));
        }
        documents.push(normalized);
        Ok(())
    }

    fn search_by_id(&self, id: i32) -> Option<Document> {
        self.documents
            .read()
            .iter()
            .find(|doc| doc.id() == Some(id))
            .cloned()
    }

    fn update_by_id(&self, id: i32, patch: &Value) -> bool {
        let Some(normalized) = normalize(patch) else {
            return false;
        };
        let mut documents = self.documents.write();
        match documents.iter_mut().find(|doc| doc.id() == Some(id)) {
            Some(current) => current.merge(&normalized),
            None => false,
        }
    }

    fn delete_by_id(&self, id: i32) -> bool {
        let mut documents = self.documents.write();
        match documents.iter().position(|doc| doc.id() == Some(id)) {
            Some(index) => {
                documents.remove(index);
                true
            }
            None => false,
        }
    }

    fn get_all(&self) -> Vec<Document> {
        self.documents.read().clone()
    }
}
