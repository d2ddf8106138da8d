//! Convenient re-exports of commonly used types from crudkit.
//!
//! Import this prelude module to quickly access the most frequently used types
//! and traits without needing to import from multiple sub-modules:
//!
//! ```ignore
//! use crudkit::prelude::*;
//! ```
//!
//! This provides access to:
//! - The document type and normalization entry point
//! - Store contracts and their in-memory and file-backed implementations
//! - Entity traits, the ready-made models, and their registries
//! - Error and result types

pub use crudkit_core::{
    document::Document,
    entity::{Entity, EntityExt},
    error::{StoreError, StoreResult},
    normalize::normalize,
    store::{DocumentStore, IndexedStore},
};

pub use crudkit_file::LineStore;
pub use crudkit_memory::{InMemoryList, JsonStore};

pub use crate::models::{Product, User};
pub use crate::registry::{ProductCatalog, UserDirectory};
