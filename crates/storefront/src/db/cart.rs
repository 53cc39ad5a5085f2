//! Cart repository: line items of the single global cart.

use rust_decimal::Decimal;
use sqlx::{Row, SqlitePool};

use gizmo_shack_core::{CartLineId, ProductId};

use super::RepositoryError;
use crate::models::cart::{CartLine, CartLineDetail};

/// Outcome of an insert-or-increment against the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineUpsert {
    /// No line existed for the product; a new one was inserted.
    Inserted(CartLineId),
    /// A line already existed; its quantity was incremented.
    Incremented,
}

/// Repository for cart line reads and writes.
pub struct CartRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every cart line joined with its product's name and price.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a joined price is not a
    /// valid decimal.
    pub async fn list(&self) -> Result<Vec<CartLineDetail>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT cart_lines.id, cart_lines.product_id, cart_lines.quantity,
                    products.name, products.price
             FROM cart_lines
             JOIN products ON cart_lines.product_id = products.id
             ORDER BY cart_lines.id",
        )
        .fetch_all(self.pool)
        .await?;

        rows.iter().map(detail_from_row).collect()
    }

    /// Find the line for a product, if one exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_product(
        &self,
        product_id: ProductId,
    ) -> Result<Option<CartLine>, RepositoryError> {
        let row = sqlx::query("SELECT id, product_id, quantity FROM cart_lines WHERE product_id = ?")
            .bind(product_id)
            .fetch_optional(self.pool)
            .await?;

        match row {
            Some(r) => Ok(Some(CartLine {
                id: r.try_get("id")?,
                product_id: r.try_get("product_id")?,
                quantity: r.try_get("quantity")?,
            })),
            None => Ok(None),
        }
    }

    /// Insert a line for the product, or increment the existing line's
    /// quantity by `quantity`.
    ///
    /// The check and the write run in one transaction so two concurrent
    /// adds for the same product cannot both observe "no line" and insert
    /// twice; the UNIQUE constraint on `product_id` backs this up.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn upsert_line(
        &self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<LineUpsert, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query("SELECT id FROM cart_lines WHERE product_id = ?")
            .bind(product_id)
            .fetch_optional(&mut *tx)
            .await?;

        let outcome = if existing.is_some() {
            sqlx::query("UPDATE cart_lines SET quantity = quantity + ? WHERE product_id = ?")
                .bind(quantity)
                .bind(product_id)
                .execute(&mut *tx)
                .await?;
            LineUpsert::Incremented
        } else {
            let result = sqlx::query("INSERT INTO cart_lines (product_id, quantity) VALUES (?, ?)")
                .bind(product_id)
                .bind(quantity)
                .execute(&mut *tx)
                .await?;
            LineUpsert::Inserted(CartLineId::new(result.last_insert_rowid()))
        };

        tx.commit().await?;
        Ok(outcome)
    }

    /// Delete a line by its id, returning the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: CartLineId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_lines WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Remove every line from the cart.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn clear(&self) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM cart_lines").execute(self.pool).await?;
        Ok(())
    }
}

/// Map a joined cart row, parsing the TEXT price column into a `Decimal`.
fn detail_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<CartLineDetail, RepositoryError> {
    let price: String = row.try_get("price")?;
    let price = price
        .parse::<Decimal>()
        .map_err(|e| RepositoryError::DataCorruption(format!("invalid price in database: {e}")))?;

    Ok(CartLineDetail {
        id: row.try_get("id")?,
        product_id: row.try_get("product_id")?,
        quantity: row.try_get("quantity")?,
        name: row.try_get("name")?,
        price,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::CatalogRepository;
    use crate::db::test_support::test_pool;

    async fn seeded_pool() -> SqlitePool {
        let pool = test_pool().await;
        CatalogRepository::new(&pool).seed().await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_upsert_inserts_then_increments() {
        let pool = seeded_pool().await;
        let cart = CartRepository::new(&pool);

        let first = cart.upsert_line(ProductId::new(1), 2).await.unwrap();
        let LineUpsert::Inserted(line_id) = first else {
            panic!("expected insert, got {first:?}");
        };

        let second = cart.upsert_line(ProductId::new(1), 3).await.unwrap();
        assert_eq!(second, LineUpsert::Incremented);

        let line = cart
            .find_by_product(ProductId::new(1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(line.id, line_id);
        assert_eq!(line.quantity, 5);
    }

    #[tokio::test]
    async fn test_list_joins_product_fields() {
        let pool = seeded_pool().await;
        let cart = CartRepository::new(&pool);

        cart.upsert_line(ProductId::new(2), 1).await.unwrap();
        cart.upsert_line(ProductId::new(7), 4).await.unwrap();

        let details = cart.list().await.unwrap();
        assert_eq!(details.len(), 2);

        assert_eq!(details[0].product_id, ProductId::new(2));
        assert_eq!(details[0].name, "Smartphone");
        assert_eq!(details[0].price, "699.99".parse::<Decimal>().unwrap());
        assert_eq!(details[1].product_id, ProductId::new(7));
        assert_eq!(details[1].quantity, 4);
    }

    #[tokio::test]
    async fn test_delete_reports_rows_removed() {
        let pool = seeded_pool().await;
        let cart = CartRepository::new(&pool);

        let LineUpsert::Inserted(line_id) =
            cart.upsert_line(ProductId::new(4), 1).await.unwrap()
        else {
            panic!("expected insert");
        };

        assert_eq!(cart.delete(line_id).await.unwrap(), 1);
        assert_eq!(cart.delete(line_id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_clear_empties_cart() {
        let pool = seeded_pool().await;
        let cart = CartRepository::new(&pool);

        cart.upsert_line(ProductId::new(1), 1).await.unwrap();
        cart.upsert_line(ProductId::new(2), 1).await.unwrap();
        cart.clear().await.unwrap();

        assert!(cart.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_zero_and_negative_quantities_are_stored_as_is() {
        let pool = seeded_pool().await;
        let cart = CartRepository::new(&pool);

        cart.upsert_line(ProductId::new(5), 0).await.unwrap();
        cart.upsert_line(ProductId::new(5), -3).await.unwrap();

        let line = cart
            .find_by_product(ProductId::new(5))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(line.quantity, -3);
    }
}
