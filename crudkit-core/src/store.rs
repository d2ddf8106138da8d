//! Store contracts shared by every backend in the toolkit.
//!
//! This module defines the traits that abstract over concrete storage
//! implementations:
//!
//! - [`DocumentStore`]: CRUD over loosely-structured JSON records keyed by an
//!   embedded integer identity
//! - [`IndexedStore`]: positional CRUD over a flat ordered collection, shared
//!   by the in-memory list and the line-file store
//!
//! Implementations are required to be thread-safe (`Send + Sync`); all
//! operations are synchronous and complete before returning.

use serde_json::Value;
use std::fmt::Debug;

use crate::{document::Document, error::StoreResult};

/// Abstract interface for document stores keyed by embedded integer identity.
///
/// Every write payload passes through normalization and identity resolution
/// before touching the underlying collection; implementations must uphold the
/// invariants that stored documents carry exactly one canonical `id` field,
/// that no two documents share an id, and that insertion order is preserved
/// across deletions.
///
/// # Error Handling
///
/// Only `add` can fail hard. Lookups that find nothing return `None`, and
/// update/delete misses report `false`; none of those are errors.
pub trait DocumentStore: Send + Sync + Debug {
    /// Validates, normalizes, and appends a new record.
    ///
    /// # Arguments
    ///
    /// * `record` - The raw record; it is deep-cloned on admission and never
    ///   mutated.
    ///
    /// # Errors
    ///
    /// * [`NullInput`](crate::error::StoreError::NullInput) - the record is null
    /// * [`MissingIdentity`](crate::error::StoreError::MissingIdentity) - no
    ///   usable `id` field
    /// * [`InvalidDocument`](crate::error::StoreError::InvalidDocument) - the
    ///   record normalizes to zero usable fields
    /// * [`DuplicateIdentity`](crate::error::StoreError::DuplicateIdentity) - a
    ///   document with the same id already exists
    fn add(&self, record: &Value) -> StoreResult<()>;

    /// Returns the first document whose resolved identity equals `id`.
    ///
    /// Documents whose identity fails to resolve are skipped. Returns `None`
    /// when nothing matches; the returned document is an owned deep copy.
    fn search_by_id(&self, id: i32) -> Option<Document>;

    /// Applies a partial update to the document with the given identity.
    ///
    /// The patch is normalized first; a patch that fails normalization, or an
    /// id that matches nothing, reports `false` without error. Fields are
    /// merged by deep structural equality and the stored `id` is never
    /// altered.
    ///
    /// # Returns
    ///
    /// Whether any stored field actually changed.
    fn update_by_id(&self, id: i32, patch: &Value) -> bool;

    /// Removes the document with the given identity, preserving the order of
    /// the remaining documents.
    ///
    /// # Returns
    ///
    /// Whether a document was removed.
    fn delete_by_id(&self, id: i32) -> bool;

    /// Returns the full collection in insertion order, as owned deep copies.
    fn get_all(&self) -> Vec<Document>;
}

/// Abstract interface for flat ordered collections addressed by position.
///
/// Shared by the in-memory typed list and the line-oriented file store. All
/// positional operations are bounds-checked; an index at or past the current
/// length fails with [`IndexOutOfRange`](crate::error::StoreError::IndexOutOfRange)
/// and leaves the collection untouched.
pub trait IndexedStore<T>: Send + Sync {
    /// Appends an item to the end of the collection.
    fn create(&self, item: T) -> StoreResult<()>;

    /// Returns an owned snapshot of the whole collection, in order.
    fn read_all(&self) -> StoreResult<Vec<T>>;

    /// Replaces the item at `index` in place.
    fn update(&self, index: usize, item: T) -> StoreResult<()>;

    /// Removes the item at `index`, shifting later items down.
    fn delete(&self, index: usize) -> StoreResult<()>;

    /// Number of items currently in the collection.
    fn len(&self) -> StoreResult<usize>;

    /// Reports whether the collection holds no items.
    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
