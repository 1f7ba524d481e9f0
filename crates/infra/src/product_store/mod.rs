//! Product persistence boundary.
//!
//! Handlers only see the `ProductStore` trait; the SQLite implementation backs
//! the running service and the in-memory one backs tests.

pub mod in_memory;
pub mod sqlite;
pub mod r#trait;

pub use in_memory::InMemoryProductStore;
pub use r#trait::{ProductStore, StoreError};
pub use sqlite::SqliteProductStore;
