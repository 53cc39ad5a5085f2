//! Unified error handling for the JSON API.
//!
//! Route handlers return `Result<T, AppError>`; the `IntoResponse` impl
//! shapes the `{"error": …}` bodies the API promises. The two not-found
//! cases carry fixed strings that clients match on; storage failures
//! surface their raw message under a 500.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::CartError;

/// Application-level error type for the storefront API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Referenced product does not exist in the catalog.
    #[error("Product not found")]
    ProductNotFound,

    /// Referenced cart line does not exist.
    #[error("Item not found in cart")]
    ItemNotFound,

    /// Database operation failed.
    #[error("{0}")]
    Database(#[from] RepositoryError),
}

impl From<CartError> for AppError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::ProductNotFound => Self::ProductNotFound,
            CartError::LineNotFound => Self::ItemNotFound,
            CartError::Repository(e) => Self::Database(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Database(_)) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::ProductNotFound | Self::ItemNotFound => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
