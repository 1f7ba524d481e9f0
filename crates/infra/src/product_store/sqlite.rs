//! SQLite-backed product store.
//!
//! The service owns one long-lived connection: the sqlx pool is capped at a
//! single connection that is never reaped, so every request reuses it and
//! SQLite's own locking serializes writers.

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use catalog_products::{NewProduct, Product, ProductChanges, Sku};

use super::r#trait::{ProductStore, StoreError};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        sku TEXT PRIMARY KEY,
        productName TEXT NOT NULL,
        price INTEGER NOT NULL,
        isAvailable INTEGER
    )
"#;

/// Product store over a single-file SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteProductStore {
    pool: SqlitePool,
}

impl SqliteProductStore {
    /// Open (creating if missing) the database file at `path`.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        Self::connect_with(options).await
    }

    /// Open a private in-memory database. Contents vanish with the store.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        Self::connect_with(options).await
    }

    async fn connect_with(options: SqliteConnectOptions) -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ProductStore for SqliteProductStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let rows: Vec<(String, String, i64, Option<i64>)> =
            sqlx::query_as("SELECT sku, productName, price, isAvailable FROM products")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(sku, product_name, price, is_available)| {
                Product::from_row(sku, product_name, price, is_available)
            })
            .collect())
    }

    async fn insert(&self, product: &NewProduct) -> Result<i64, StoreError> {
        let result = sqlx::query(
            "INSERT INTO products (sku, productName, price, isAvailable) VALUES (?, ?, ?, ?)",
        )
        .bind(product.sku.as_str())
        .bind(&product.product_name)
        .bind(product.price)
        .bind(product.availability_flag().raw())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, sku: &Sku, changes: &ProductChanges) -> Result<u64, StoreError> {
        let result = sqlx::query(
            "UPDATE products SET productName = ?, price = ?, isAvailable = ? WHERE sku = ?",
        )
        .bind(&changes.product_name)
        .bind(changes.price)
        .bind(changes.availability_flag().raw())
        .bind(sku.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, sku: &Sku) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE sku = ?")
            .bind(sku.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
