//! Main crudkit crate providing a unified interface to the CRUD toolkit.
//!
//! This crate is the primary entry point for users of the crudkit project.
//! It re-exports the core types and functionality from the sub-crates,
//! provides convenient access to the storage backends, and ships ready-made
//! typed models with registries built on top of them.
//!
//! # Features
//!
//! - **Forgiving document CRUD** - Store loosely-structured JSON records keyed
//!   by an embedded integer id; malformed payloads are rejected with precise
//!   errors, lookups that find nothing are plain values, never errors
//! - **Multiple backends** - An in-memory document store and list, plus a
//!   line-oriented flat-file store behind the same positional contract
//! - **Typed entities** - Bridge your own serde types to and from stored
//!   documents, with validity rules the registries enforce at the edges
//!
//! # Quick Start
//!
//! ```ignore
//! use crudkit::prelude::*;
//! use serde_json::json;
//!
//! fn main() -> StoreResult<()> {
//!     let store = JsonStore::new();
//!
//!     // Create
//!     store.add(&json!({"id": 100, "name": "Original"}))?;
//!
//!     // Read
//!     let found = store.search_by_id(100).unwrap();
//!     assert_eq!(found.get("name"), Some(&json!("Original")));
//!
//!     // Update: field-level merge, reports whether anything changed
//!     assert!(store.update_by_id(100, &json!({"name": "Updated"})));
//!
//!     // Delete
//!     assert!(store.delete_by_id(100));
//!     assert!(store.search_by_id(100).is_none());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Typed models
//!
//! ```ignore
//! use crudkit::prelude::*;
//!
//! let directory = UserDirectory::new();
//! directory.try_add(User::new(1, "alice", "alice@example.com"))?;
//!
//! assert!(directory.username_exists("ALICE"));
//! ```
//!
//! # Backends
//!
//! - [`memory`] - In-memory document store and generic list
//! - [`file`] - Line-oriented flat-file store

pub mod models;
pub mod prelude;
pub mod registry;

pub use crudkit_core::{document, entity, error, identity, normalize, store};

// Re-export serde_json for convenience
pub use serde_json;

/// In-memory storage implementations.
pub mod memory {
    pub use crudkit_memory::{InMemoryList, JsonStore};
}

/// Line-oriented flat-file storage.
pub mod file {
    pub use crudkit_file::LineStore;
}
