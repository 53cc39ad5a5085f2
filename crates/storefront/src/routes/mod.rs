//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health            - Liveness check
//! GET    /health/ready      - Readiness check (database ping)
//!
//! # Catalog
//! GET    /api/products      - Fixed product catalog
//!
//! # Cart
//! GET    /api/cart          - Cart lines + running total
//! POST   /api/cart          - Add a product (merges into an existing line)
//! DELETE /api/cart/{id}     - Remove a line by its line id
//!
//! # Checkout
//! POST   /api/checkout      - Mock checkout: receipt + cart clear
//! ```

pub mod cart;
pub mod checkout;
pub mod products;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Create the catalog routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new().route("/products", get(products::index))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/cart", get(cart::show).post(cart::add))
        .route("/cart/{id}", delete(cart::remove))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new().route("/checkout", post(checkout::checkout))
}

/// Create all routes for the storefront API.
pub fn routes() -> Router<AppState> {
    Router::new().nest(
        "/api",
        Router::new()
            .merge(product_routes())
            .merge(cart_routes())
            .merge(checkout_routes()),
    )
}
