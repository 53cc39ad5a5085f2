//! Catalog product model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use gizmo_shack_core::ProductId;

/// A purchasable product from the fixed catalog.
///
/// Products are seeded once at process start and never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Non-negative unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}
