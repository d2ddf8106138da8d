//! A small CRUD toolkit for loosely-structured JSON records keyed by an embedded integer id.
//!
//! This crate is the core of the crudkit project and provides:
//!
//! - **Document representation** ([`document`]) - The validated, ordered record type and field merging
//! - **Normalization** ([`normalize`]) - The single admission path turning raw records into documents
//! - **Identity resolution** ([`identity`]) - Case-insensitive id extraction and strict integer parsing
//! - **Store contracts** ([`store`]) - Traits for document stores and index-addressed collections
//! - **Typed entities** ([`entity`]) - Traits for bridging typed models and dynamic documents
//! - **Error handling** ([`error`]) - Shared error and result types
//!
//! # Example
//!
//! ```ignore
//! use crudkit::prelude::*;
//! use serde_json::json;
//!
//! let store = JsonStore::new();
//! store.add(&json!({"id": 1, "name": "Alice"}))?;
//!
//! let found = store.search_by_id(1);
//! assert!(found.is_some());
//! ```

#[allow(unused_extern_crates)]
extern crate self as crudkit_core;

pub mod document;
pub mod entity;
pub mod error;
pub mod identity;
pub mod normalize;
pub mod store;
