//! Local key-value persistence for the inventory tracker.
//!
//! Two records survive a process restart, each a JSON text value under a
//! stable key: the product list and the category list. The trait makes no
//! assumption about the backing medium; the file-backed implementation is
//! the production path and the in-memory one serves tests/dev.

mod file;
mod in_memory;
mod r#trait;

pub use file::FileStore;
pub use in_memory::InMemoryStore;
pub use r#trait::{KeyValueStore, StorageError, CATEGORIES_KEY, PRODUCTS_KEY};
