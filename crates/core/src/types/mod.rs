//! Core types for Gizmo Shack.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod order;

pub use id::*;
pub use order::{OrderId, OrderIdError};
