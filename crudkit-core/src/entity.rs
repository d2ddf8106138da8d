//! Typed entities and their bridge to the dynamic document shape.
//!
//! This module provides the trait that typed models implement to participate
//! in the toolkit, plus a blanket extension for converting entities to and
//! from [`Document`]s through serde.

use serde::{Deserialize, Serialize};
use serde_json::{Value, from_value, to_value};

use crate::document::Document;
use crate::error::{StoreError, StoreResult};
use crate::normalize::normalize;

/// Core trait for typed models with an embedded integer identity.
///
/// # Deriving with `#[derive]`
///
/// While `Entity` cannot be automatically derived, you can derive its
/// super-traits:
/// - `Serialize` (from serde)
/// - `Deserialize` (from serde)
/// - `Clone`
///
/// # Example
///
/// ```ignore
/// use crudkit::entity::Entity;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct User {
///     pub id: i32,
///     pub username: String,
/// }
///
/// impl Entity for User {
///     fn id(&self) -> i32 {
///         self.id
///     }
///
///     fn is_valid(&self) -> bool {
///         self.id > 0 && !self.username.trim().is_empty()
///     }
/// }
/// ```
pub trait Entity: Serialize + for<'de> Deserialize<'de> + Send + Sync + Clone + 'static {
    /// Returns this entity's integer identity.
    fn id(&self) -> i32;

    /// Reports whether the entity satisfies its own domain rules.
    ///
    /// Validity is advisory: stores do not enforce it, registries do.
    fn is_valid(&self) -> bool;
}

/// Extension trait providing conversion utilities for entities.
///
/// This trait is automatically implemented for all types that implement
/// [`Entity`]. It provides convenient methods to move between typed entities,
/// plain JSON values, and normalized [`Document`]s.
pub trait EntityExt: Entity {
    /// Converts this entity into a normalized document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the entity normalizes to
    /// zero usable fields.
    fn to_document(&self) -> StoreResult<Document>;

    /// Creates an entity from a stored document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document lacks fields the entity requires or
    /// holds values of the wrong shape.
    fn from_document(document: &Document) -> StoreResult<Self>;

    /// Converts this entity to a plain JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn to_json(&self) -> StoreResult<Value>;

    /// Creates an entity from a plain JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the structure is invalid.
    fn from_json(value: Value) -> StoreResult<Self>;
}

impl<E: Entity> EntityExt for E {
    fn to_document(&self) -> StoreResult<Document> {
        let value = to_value(self)?;
        normalize(&value)
            .ok_or_else(|| StoreError::InvalidDocument("entity has no storable fields".to_string()))
    }

    fn from_document(document: &Document) -> StoreResult<Self> {
        Ok(from_value(document.clone().into_value())?)
    }

    fn to_json(&self) -> StoreResult<Value> {
        Ok(to_value(self)?)
    }

    fn from_json(value: Value) -> StoreResult<Self> {
        Ok(from_value(value)?)
    }
}
