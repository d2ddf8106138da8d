//! Line-oriented flat-file backend for crudkit.
//!
//! This crate provides a file-based implementation of the `IndexedStore`
//! contract, storing one item per line in a plain text file. It carries none
//! of the document store's invariants: lines are opaque strings addressed by
//! position.
//!
//! # Features
//!
//! - **Durable lines** - every operation reads from and writes to the backing
//!   file, nothing is cached in memory
//! - **Bounds-checked access** - out-of-range updates and deletes fail without
//!   touching the file
//! - **Plain I/O errors** - OS-level failures (permissions, exclusive locks
//!   held elsewhere) surface as [`StoreError::Io`](crudkit_core::error::StoreError::Io)
//!
//! # Example
//!
//! ```ignore
//! use crudkit::{file::LineStore, store::IndexedStore};
//!
//! let store = LineStore::open("notes.txt")?;
//! store.create("first note".to_string())?;
//! store.update(0, "revised note".to_string())?;
//!
//! assert_eq!(store.read_all()?, ["revised note"]);
//! ```

#[allow(unused_extern_crates)]
extern crate self as crudkit_file;

pub mod store;

pub use store::LineStore;
