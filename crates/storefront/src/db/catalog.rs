//! Catalog repository: the fixed, read-only product set.

use rust_decimal::Decimal;
use sqlx::{Row, SqlitePool};

use gizmo_shack_core::ProductId;

use super::RepositoryError;
use crate::models::product::Product;

/// The fixed catalog, inserted in this order with ids 1..=7.
const SEED_PRODUCTS: &[(&str, &str)] = &[
    ("Wireless Headphones", "99.99"),
    ("Smartphone", "699.99"),
    ("Laptop", "1299.99"),
    ("Smart Watch", "199.99"),
    ("Tablet", "499.99"),
    ("Gaming Console", "399.99"),
    ("Bluetooth Speaker", "79.99"),
];

/// Repository for product catalog reads.
pub struct CatalogRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CatalogRepository<'a> {
    /// Create a new catalog repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the fixed catalog entries with auto-assigned ascending ids.
    ///
    /// Skipped when the table is already populated, so calling it again
    /// against a live database is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn seed(&self) -> Result<(), RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(self.pool)
            .await?;
        if count > 0 {
            return Ok(());
        }

        for &(name, price) in SEED_PRODUCTS {
            sqlx::query("INSERT INTO products (name, price) VALUES (?, ?)")
                .bind(name)
                .bind(price)
                .execute(self.pool)
                .await?;
        }

        tracing::info!(products = SEED_PRODUCTS.len(), "Catalog seeded");
        Ok(())
    }

    /// List every product in insertion (id) order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored price is not a
    /// valid decimal.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query("SELECT id, name, price FROM products ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        rows.iter().map(product_from_row).collect()
    }

    /// Look up a single product by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored price is not
    /// a valid decimal.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query("SELECT id, name, price FROM products WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        row.as_ref().map(product_from_row).transpose()
    }
}

/// Map a product row, parsing the TEXT price column into a `Decimal`.
fn product_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Product, RepositoryError> {
    let price: String = row.try_get("price")?;
    let price = price
        .parse::<Decimal>()
        .map_err(|e| RepositoryError::DataCorruption(format!("invalid price in database: {e}")))?;

    Ok(Product {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        price,
    })
}
