//! Checkout: synthesize a receipt from the client-submitted cart snapshot.
//!
//! Checkout trusts the submitted items' prices entirely and never re-reads
//! them from the cart store. A stricter variant could re-derive the
//! snapshot server-side behind this same interface without touching the
//! receipt shaping.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::SqlitePool;

use gizmo_shack_core::OrderId;

use crate::db::CartRepository;
use crate::models::receipt::{Customer, Receipt, SubmittedItem};

/// Confirmation message attached to every receipt.
const RECEIPT_MESSAGE: &str = "Thank you for your purchase! This is a mock transaction.";

/// Parameters submitted by the client at checkout.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub name: String,
    pub email: String,
    pub cart_items: Vec<SubmittedItem>,
}

/// Checkout operations: receipt synthesis plus cart cleanup.
pub struct CheckoutService<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CheckoutService<'a> {
    /// Create a new checkout service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Build a receipt for the submitted snapshot and clear the cart store.
    ///
    /// The total is computed over the submitted items only, even when they
    /// diverge from the store's contents. Clearing the cart is the single
    /// swallowed failure in the system: an error there is logged and the
    /// customer still gets their receipt.
    pub async fn checkout(&self, request: CheckoutRequest) -> Receipt {
        let total: Decimal = request
            .cart_items
            .iter()
            .map(SubmittedItem::line_total)
            .sum();

        let receipt = Receipt {
            order_id: OrderId::generate(&mut rand::rng()),
            customer: Customer {
                name: request.name,
                email: request.email,
            },
            items: request.cart_items,
            total,
            timestamp: Utc::now(),
            message: RECEIPT_MESSAGE.to_string(),
        };

        if let Err(e) = CartRepository::new(self.pool).clear().await {
            tracing::error!("Failed to clear cart after checkout: {e}");
        }

        receipt
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::test_support::test_pool;
    use crate::db::CatalogRepository;
    use crate::services::CartService;
    use gizmo_shack_core::ProductId;

    fn item(price: &str, quantity: i64) -> SubmittedItem {
        SubmittedItem {
            price: price.parse().unwrap(),
            quantity,
            extra: serde_json::Map::new(),
        }
    }

    fn request(cart_items: Vec<SubmittedItem>) -> CheckoutRequest {
        CheckoutRequest {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            cart_items,
        }
    }

    #[tokio::test]
    async fn test_total_covers_submitted_items_only() {
        let pool = test_pool().await;
        CatalogRepository::new(&pool).seed().await.unwrap();

        // Store holds something entirely different from the snapshot
        CartService::new(&pool)
            .add_to_cart(ProductId::new(3), 5)
            .await
            .unwrap();

        let receipt = CheckoutService::new(&pool)
            .checkout(request(vec![item("10.25", 2), item("0.50", 3)]))
            .await;

        // 10.25 x 2 + 0.50 x 3 = 22.00
        assert_eq!(receipt.total, "22.00".parse::<Decimal>().unwrap());
        assert_eq!(receipt.items.len(), 2);
    }

    #[tokio::test]
    async fn test_checkout_clears_cart_store() {
        let pool = test_pool().await;
        CatalogRepository::new(&pool).seed().await.unwrap();

        let cart = CartService::new(&pool);
        cart.add_to_cart(ProductId::new(1), 2).await.unwrap();
        cart.add_to_cart(ProductId::new(2), 1).await.unwrap();

        CheckoutService::new(&pool)
            .checkout(request(vec![item("1.00", 1)]))
            .await;

        assert!(cart.get_cart().await.unwrap().items.is_empty());
    }

    #[tokio::test]
    async fn test_receipt_shape() {
        let pool = test_pool().await;

        let receipt = CheckoutService::new(&pool)
            .checkout(request(vec![]))
            .await;

        assert_eq!(receipt.total, Decimal::ZERO);
        assert_eq!(receipt.customer.name, "Ada Lovelace");
        assert_eq!(receipt.customer.email, "ada@example.com");
        assert_eq!(
            receipt.message,
            "Thank you for your purchase! This is a mock transaction."
        );
        assert!(OrderId::parse(receipt.order_id.as_str()).is_ok());
    }

    #[tokio::test]
    async fn test_extra_item_fields_are_echoed() {
        let pool = test_pool().await;

        let mut extra = serde_json::Map::new();
        extra.insert("name".to_string(), "Laptop".into());
        let submitted = SubmittedItem {
            price: "1299.99".parse().unwrap(),
            quantity: 1,
            extra,
        };

        let receipt = CheckoutService::new(&pool)
            .checkout(request(vec![submitted]))
            .await;

        assert_eq!(receipt.items[0].extra["name"], "Laptop");
    }
}
