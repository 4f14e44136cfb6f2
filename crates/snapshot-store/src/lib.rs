//! Whole-document JSON snapshots.
//!
//! Every save overwrites the complete file; every load reads it in full.
//! There are no partial updates and no schema versioning.

mod error;
mod store;

pub use error::StoreError;
pub use store::{FileStore, MemoryStore, Store};
