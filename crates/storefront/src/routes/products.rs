//! Catalog route handlers.

use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::db::CatalogRepository;
use crate::error::Result;
use crate::models::product::Product;
use crate::state::AppState;

/// List the full product catalog in seed order.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = CatalogRepository::new(state.pool()).list().await?;
    Ok(Json(products))
}
