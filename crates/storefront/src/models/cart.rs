//! Cart line models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use gizmo_shack_core::{CartLineId, ProductId};

/// A raw cart line as stored: one product, one quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine {
    pub id: CartLineId,
    pub product_id: ProductId,
    /// Incremented on repeated adds. Zero and negative values are legal;
    /// callers are trusted.
    pub quantity: i64,
}

/// A cart line joined with its product's name and price, as served by
/// `GET /api/cart`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineDetail {
    pub id: CartLineId,
    pub product_id: ProductId,
    pub quantity: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl CartLineDetail {
    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// The full cart with its running total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartView {
    pub items: Vec<CartLineDetail>,
    /// Sum of `price * quantity` over `items`, recomputed on every read.
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}
