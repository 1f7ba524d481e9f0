use std::sync::RwLock;

use async_trait::async_trait;

use catalog_products::{NewProduct, Product, ProductChanges, Sku};

use super::r#trait::{ProductStore, StoreError};

#[derive(Debug, Default)]
struct Table {
    /// Rows in insertion order, each tagged with its row id.
    rows: Vec<(i64, Product)>,
    last_row_id: i64,
}

/// In-memory product store.
///
/// Intended for tests/dev. Mirrors the SQLite semantics that handlers rely on:
/// duplicate `sku` inserts fail, row ids increase monotonically, and `list`
/// returns insertion order.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    table: RwLock<Table>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> StoreError {
        StoreError::Backend("lock poisoned".to_string())
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let table = self.table.read().map_err(|_| Self::poisoned())?;
        Ok(table.rows.len() as u64)
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let table = self.table.read().map_err(|_| Self::poisoned())?;
        Ok(table.rows.iter().map(|(_, p)| p.clone()).collect())
    }

    async fn insert(&self, product: &NewProduct) -> Result<i64, StoreError> {
        let mut table = self.table.write().map_err(|_| Self::poisoned())?;

        if table.rows.iter().any(|(_, p)| p.sku == product.sku) {
            return Err(StoreError::Duplicate(format!(
                "UNIQUE constraint failed: products.sku ({})",
                product.sku
            )));
        }

        table.last_row_id += 1;
        let row_id = table.last_row_id;
        table.rows.push((row_id, product.clone().into_product()));
        Ok(row_id)
    }

    async fn update(&self, sku: &Sku, changes: &ProductChanges) -> Result<u64, StoreError> {
        let mut table = self.table.write().map_err(|_| Self::poisoned())?;

        let mut touched = 0;
        for (_, p) in table.rows.iter_mut().filter(|(_, p)| &p.sku == sku) {
            changes.apply_to(p);
            touched += 1;
        }
        Ok(touched)
    }

    async fn delete(&self, sku: &Sku) -> Result<u64, StoreError> {
        let mut table = self.table.write().map_err(|_| Self::poisoned())?;

        let before = table.rows.len();
        table.rows.retain(|(_, p)| &p.sku != sku);
        Ok((before - table.rows.len()) as u64)
    }
}
