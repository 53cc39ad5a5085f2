//! Domain models and wire types for the storefront API.
//!
//! Wire field names are camelCase (`productId`, `orderId`, `cartItems`);
//! prices serialize as plain JSON numbers.

pub mod cart;
pub mod product;
pub mod receipt;
