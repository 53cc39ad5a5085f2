//! Cart route handlers.

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use gizmo_shack_core::{CartLineId, ProductId};

use crate::error::Result;
use crate::models::cart::CartView;
use crate::services::{CartAddition, CartService};
use crate::state::AppState;

/// Add to cart request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    /// Accepted uncritically; zero and negative values are stored as-is.
    pub quantity: i64,
}

/// Add to cart response body.
#[derive(Debug, Serialize)]
pub struct AddToCartResponse {
    pub message: &'static str,
    /// Present only when a new line was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CartLineId>,
}

/// Remove from cart response body.
#[derive(Debug, Serialize)]
pub struct RemoveFromCartResponse {
    pub message: &'static str,
}

/// Current cart contents with the running total.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Json<CartView>> {
    let cart = CartService::new(state.pool()).get_cart().await?;
    Ok(Json(cart))
}

/// Add a product to the cart, merging into an existing line if present.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Json(body): Json<AddToCartRequest>,
) -> Result<Json<AddToCartResponse>> {
    let outcome = CartService::new(state.pool())
        .add_to_cart(body.product_id, body.quantity)
        .await?;

    let response = match outcome {
        CartAddition::Added { line_id } => AddToCartResponse {
            message: "Item added to cart",
            id: Some(line_id),
        },
        CartAddition::QuantityUpdated => AddToCartResponse {
            message: "Item quantity updated in cart",
            id: None,
        },
    };

    Ok(Json(response))
}

/// Remove a cart line by its line id.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<CartLineId>,
) -> Result<Json<RemoveFromCartResponse>> {
    CartService::new(state.pool()).remove_from_cart(id).await?;
    Ok(Json(RemoveFromCartResponse {
        message: "Item removed from cart",
    }))
}
