//! Checkout receipt models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use gizmo_shack_core::OrderId;

/// Customer details as submitted at checkout.
///
/// Not validated against any account system; echoed back on the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
}

/// One item of the client-submitted cart snapshot.
///
/// Only `price` and `quantity` participate in the total; any other fields
/// the client sends are carried through to the receipt untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedItem {
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: i64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl SubmittedItem {
    /// Price times quantity for this item.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// The synthesized, non-persisted purchase confirmation.
///
/// Constructed and returned synchronously within the checkout call; never
/// stored anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub order_id: OrderId,
    pub customer: Customer,
    /// The cart snapshot the client submitted, echoed verbatim.
    pub items: Vec<SubmittedItem>,
    /// Sum of `price * quantity` over `items`.
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    /// Creation time in ISO-8601.
    pub timestamp: DateTime<Utc>,
    pub message: String,
}
