use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use catalog_products::{NewProduct, Product, ProductChanges, Sku};

/// Product store operation error.
///
/// These are **infrastructure errors** as opposed to the domain validation
/// errors raised before a store is ever called.
///
/// ## Error Categories
///
/// - **Duplicate**: primary-key (`sku`) uniqueness was violated on insert
/// - **Backend**: anything else the storage engine reported (I/O, SQL, decode)
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate key: {0}")]
    Duplicate(String),

    #[error("storage backend failure: {0}")]
    Backend(String),
}

impl StoreError {
    /// The raw detail text reported by the backend.
    pub fn detail(&self) -> &str {
        match self {
            StoreError::Duplicate(msg) | StoreError::Backend(msg) => msg,
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::Duplicate(db.message().to_string())
            }
            _ => StoreError::Backend(err.to_string()),
        }
    }
}

/// Single-table product persistence.
///
/// Every method maps to exactly **one** SQL statement (or its in-memory
/// equivalent). No method spans a transaction, so callers get the engine's
/// single-statement atomicity and nothing more.
///
/// ## Row counts
///
/// `update` and `delete` return the number of rows touched. `0` means the
/// `sku` did not exist; callers turn that into a not-found response.
///
/// ## Implementation Requirements
///
/// Implementations must:
/// - reject an insert whose `sku` already exists with `StoreError::Duplicate`
/// - store `isAvailable` as a 0/1 flag and return it as a boolean
/// - return rows from `list` in the backend's natural order (no sorting)
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Create the `products` table if it does not exist yet.
    async fn ensure_schema(&self) -> Result<(), StoreError>;

    /// Number of stored products.
    async fn count(&self) -> Result<u64, StoreError>;

    /// All products, full scan, no filtering.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    /// Insert one product and return the backend-assigned row id.
    async fn insert(&self, product: &NewProduct) -> Result<i64, StoreError>;

    /// Replace every mutable field of the product identified by `sku`.
    async fn update(&self, sku: &Sku, changes: &ProductChanges) -> Result<u64, StoreError>;

    /// Delete the product identified by `sku`.
    async fn delete(&self, sku: &Sku) -> Result<u64, StoreError>;
}

#[async_trait]
impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        (**self).ensure_schema().await
    }

    async fn count(&self) -> Result<u64, StoreError> {
        (**self).count().await
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        (**self).list().await
    }

    async fn insert(&self, product: &NewProduct) -> Result<i64, StoreError> {
        (**self).insert(product).await
    }

    async fn update(&self, sku: &Sku, changes: &ProductChanges) -> Result<u64, StoreError> {
        (**self).update(sku, changes).await
    }

    async fn delete(&self, sku: &Sku) -> Result<u64, StoreError> {
        (**self).delete(sku).await
    }
}
