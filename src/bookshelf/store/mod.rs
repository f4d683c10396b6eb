//! # Storage Layer
//!
//! The [`BookStore`] trait abstracts where the collection lives. The whole
//! shelf is one serialized slot: `load` hands back every record, `save`
//! rewrites all of them. There is no per-record persistence and no diffing;
//! every mutation upstream goes through a full read-modify-rewrite.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single pretty-printed JSON
//!   array in `books.json` under the data directory
//! - [`memory::InMemoryStore`]: in-memory storage for fast, isolated tests
//!
//! ## Fail-Open Contract
//!
//! `load` must return an empty collection when the slot is absent **or**
//! unparseable. Malformed data never surfaces as an error to the user; the
//! shelf simply starts over empty. `save` errors (permissions, disk) do
//! propagate.

use crate::error::Result;
use crate::model::Book;

pub mod fs;
pub mod memory;

/// Abstract interface for collection storage.
pub trait BookStore {
    /// Load the full collection; absent or malformed state yields an empty
    /// collection rather than an error.
    fn load(&self) -> Result<Vec<Book>>;

    /// Serialize and overwrite the persisted slot unconditionally.
    fn save(&mut self, books: &[Book]) -> Result<()>;
}
