//! Checkout route handler.

use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::models::receipt::Receipt;
use crate::services::{CheckoutRequest, CheckoutService};
use crate::state::AppState;

/// Mock checkout: synthesize a receipt and clear the cart.
///
/// Always succeeds once the body parses; a failure while clearing the
/// cart store is logged inside the service and never surfaced here.
#[instrument(skip(state, body))]
pub async fn checkout(
    State(state): State<AppState>,
    Json(body): Json<CheckoutRequest>,
) -> Json<Receipt> {
    let receipt = CheckoutService::new(state.pool()).checkout(body).await;
    Json(receipt)
}
