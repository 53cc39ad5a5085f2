//! Gizmo Shack Core - Shared types library.
//!
//! This crate provides common types used across all Gizmo Shack components:
//! - `storefront` - Mock e-commerce JSON API
//! - `integration-tests` - End-to-end HTTP tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and mock order identifiers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
