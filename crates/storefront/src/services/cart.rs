//! Cart business logic.

use rust_decimal::Decimal;
use sqlx::SqlitePool;
use thiserror::Error;

use gizmo_shack_core::{CartLineId, ProductId};

use crate::db::{CartRepository, CatalogRepository, LineUpsert, RepositoryError};
use crate::models::cart::{CartLineDetail, CartView};

/// Errors that can occur during cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The referenced product does not exist in the catalog.
    #[error("product not found")]
    ProductNotFound,

    /// The referenced cart line does not exist.
    #[error("cart line not found")]
    LineNotFound,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Outcome of adding a product to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAddition {
    /// No line existed for the product; a new one was created.
    Added {
        /// Id of the freshly inserted line.
        line_id: CartLineId,
    },
    /// The product was already in the cart; its quantity grew.
    QuantityUpdated,
}

/// Cart operations against the catalog and cart stores.
pub struct CartService<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CartService<'a> {
    /// Create a new cart service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Add a product to the cart, merging into an existing line if present.
    ///
    /// The quantity is deliberately not validated: zero and negative values
    /// are accepted and stored as-is.
    ///
    /// # Errors
    ///
    /// Returns `CartError::ProductNotFound` if the product id is not in the
    /// catalog, or `CartError::Repository` if a store operation fails.
    pub async fn add_to_cart(
        &self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<CartAddition, CartError> {
        // The catalog is immutable after seeding, so this check cannot go
        // stale before the upsert below.
        if CatalogRepository::new(self.pool)
            .get(product_id)
            .await?
            .is_none()
        {
            return Err(CartError::ProductNotFound);
        }

        let outcome = match CartRepository::new(self.pool)
            .upsert_line(product_id, quantity)
            .await?
        {
            LineUpsert::Inserted(line_id) => CartAddition::Added { line_id },
            LineUpsert::Incremented => CartAddition::QuantityUpdated,
        };

        Ok(outcome)
    }

    /// Remove a cart line by its line id (not product id).
    ///
    /// # Errors
    ///
    /// Returns `CartError::LineNotFound` if no such line existed, or
    /// `CartError::Repository` if the store operation fails.
    pub async fn remove_from_cart(&self, line_id: CartLineId) -> Result<(), CartError> {
        let removed = CartRepository::new(self.pool).delete(line_id).await?;
        if removed == 0 {
            return Err(CartError::LineNotFound);
        }
        Ok(())
    }

    /// Fetch the full cart with its running total.
    ///
    /// The total is recomputed from the joined lines on every read, never
    /// cached or stored.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Repository` if the store read fails.
    pub async fn get_cart(&self) -> Result<CartView, CartError> {
        let items = CartRepository::new(self.pool).list().await?;
        let total: Decimal = items.iter().map(CartLineDetail::line_total).sum();
        Ok(CartView { items, total })
    }
}
