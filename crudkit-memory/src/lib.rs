//! In-memory storage backends for crudkit.
//!
//! This crate provides thread-safe, in-memory implementations of the store
//! contracts:
//!
//! - [`JsonStore`] - the document store: CRUD over loosely-structured JSON
//!   records keyed by an embedded integer id
//! - [`InMemoryList`] - a generic ordered list with index-based CRUD
//!
//! Both share the same shape: a cheaply cloneable handle around an
//! `Arc`-wrapped collection behind a read-write lock, so clones of one store
//! see the same data.
//!
//! # Quick Start
//!
//! ```ignore
//! use crudkit::{memory::JsonStore, store::DocumentStore};
//! use serde_json::json;
//!
//! let store = JsonStore::new();
//! store.add(&json!({"id": 100, "name": "Original"}))?;
//!
//! store.update_by_id(100, &json!({"name": "Updated"}));
//! assert_eq!(store.search_by_id(100).unwrap().get("name"), Some(&json!("Updated")));
//! ```

#[allow(unused_extern_crates)]
extern crate self as crudkit_memory;

pub mod json;
pub mod list;

pub use json::JsonStore;
pub use list::InMemoryList;
