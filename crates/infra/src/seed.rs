//! Startup storage initialization: schema + baseline rows.
//!
//! Seeding is **insert-only-if-empty**: the seed set is written only when the
//! table holds no rows at all. A table with any content (seeded or
//! user-created) is never touched, so repeated startups are no-ops once data
//! exists.

use catalog_products::NewProduct;

use crate::product_store::{ProductStore, StoreError};

/// Baseline rows: `(sku, productName, price, isAvailable)`.
pub const SEED_PRODUCTS: &[(&str, &str, i64, bool)] =
    &[("TSHIRT-001", "Kaos Ijen Crater", 75_000, true)];

/// What the initializer did to the table.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The table was empty; this many seed rows were inserted.
    Seeded(usize),
    /// The table already held this many rows; nothing was written.
    Skipped(u64),
}

pub fn seed_products() -> Vec<NewProduct> {
    SEED_PRODUCTS
        .iter()
        .map(|(sku, name, price, available)| NewProduct {
            sku: (*sku).into(),
            product_name: (*name).to_string(),
            price: *price,
            is_available: *available,
        })
        .collect()
}

/// Ensure the `products` table exists, then seed it if it is empty.
pub async fn initialize<S>(store: &S) -> Result<SeedOutcome, StoreError>
where
    S: ProductStore + ?Sized,
{
    store.ensure_schema().await?;

    let existing = store.count().await?;
    if existing > 0 {
        tracing::info!(existing, "products table already populated; seeding skipped");
        return Ok(SeedOutcome::Skipped(existing));
    }

    let seeds = seed_products();
    for product in &seeds {
        store.insert(product).await?;
    }
    tracing::info!(rows = seeds.len(), "seeded empty products table");

    Ok(SeedOutcome::Seeded(seeds.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product_store::{InMemoryProductStore, SqliteProductStore};
    use catalog_products::Sku;

    #[tokio::test]
    async fn seeds_empty_table_once() {
        let store = SqliteProductStore::in_memory().await.unwrap();

        assert_eq!(initialize(&store).await.unwrap(), SeedOutcome::Seeded(1));
        assert_eq!(initialize(&store).await.unwrap(), SeedOutcome::Skipped(1));

        let products = store.list().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].sku.as_str(), "TSHIRT-001");
        assert_eq!(products[0].product_name, "Kaos Ijen Crater");
        assert_eq!(products[0].price, 75_000);
        assert!(products[0].is_available);
    }

    #[tokio::test]
    async fn populated_table_is_left_untouched() {
        let store = InMemoryProductStore::new();
        store.ensure_schema().await.unwrap();
        let own = NewProduct::validate(
            Some("OWN-1".into()),
            Some("Mug".into()),
            Some(15_000),
            None,
        )
        .unwrap();
        store.insert(&own).await.unwrap();

        assert_eq!(initialize(&store).await.unwrap(), SeedOutcome::Skipped(1));

        let products = store.list().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].sku, Sku::from("OWN-1"));
    }

    #[tokio::test]
    async fn emptied_table_is_reseeded() {
        let store = InMemoryProductStore::new();
        initialize(&store).await.unwrap();
        store.delete(&Sku::from("TSHIRT-001")).await.unwrap();

        assert_eq!(initialize(&store).await.unwrap(), SeedOutcome::Seeded(1));
        assert_eq!(store.count().await.unwrap(), 1);
    }
}
