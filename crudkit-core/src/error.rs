//! Error types and result types for store operations.
//!
//! This module provides the shared error handling for every store in the toolkit.
//! Use [`StoreResult<T>`] as the return type for fallible operations.

use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use thiserror::Error;

/// Represents all possible errors that can occur when interacting with a store.
///
/// This enum covers write-payload validation, identity management, index-based
/// access, and I/O errors from file-backed stores.
///
/// Absence is not an error: lookups that find nothing return `None` or `false`
/// from their operations rather than a variant of this enum.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The write payload was null where a record was required.
    #[error("Input record is null")]
    NullInput,
    /// The record offered for creation carries no usable `id` field.
    ///
    /// Raised both when the `id` field is absent or non-scalar, and when a
    /// scalar `id` fails integer parsing while other fields survive
    /// normalization.
    #[error("Record has no usable id field")]
    MissingIdentity,
    /// The record normalizes to zero usable fields.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
    /// A document with the given id already exists in the store.
    #[error("Document with id {0} already exists")]
    DuplicateIdentity(i32),
    /// An index-based operation addressed a position outside the collection.
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// Serialization/deserialization error when bridging typed entities and documents.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// An I/O error from a file-backed store.
    #[error("I/O error: {0}")]
    Io(#[from] IoError),
}

/// A specialized `Result` type for store operations.
///
/// This type alias is used throughout the toolkit to indicate operations that
/// may fail with a [`StoreError`].
pub type StoreResult<T> = Result<T, StoreError>;

impl From<SerdeJsonError> for StoreError {
    fn from(err: SerdeJsonError) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
