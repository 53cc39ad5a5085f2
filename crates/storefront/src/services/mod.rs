//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `cart` - cart mutations and running totals (catalog existence checks
//!   plus cart store writes)
//! - `checkout` - receipt synthesis from the client-submitted snapshot,
//!   then cart cleanup

pub mod cart;
pub mod checkout;

pub use cart::{CartAddition, CartError, CartService};
pub use checkout::{CheckoutRequest, CheckoutService};
