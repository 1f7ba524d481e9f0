//! Infrastructure layer: SQLite storage, seeding, configuration.

pub mod config;
pub mod product_store;
pub mod seed;

pub use config::{Config, ConfigError};
pub use product_store::{InMemoryProductStore, ProductStore, SqliteProductStore, StoreError};
pub use seed::{SeedOutcome, initialize};
