//! Database operations for the storefront's in-memory SQLite store.
//!
//! # Tables
//!
//! - `products` - the fixed catalog, seeded once at startup and read-only
//!   afterwards
//! - `cart_lines` - current cart contents, at most one row per distinct
//!   product
//!
//! The database is created fresh on every process start; nothing survives
//! shutdown.

pub mod cart;
pub mod catalog;

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;

pub use cart::{CartRepository, LineUpsert};
pub use catalog::CatalogRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a SQLite connection pool.
///
/// The pool is pinned to a single connection that is opened eagerly and
/// never recycled: an in-memory SQLite database lives and dies with its
/// connection, so letting the pool retire it would silently wipe both
/// tables. The single connection also serializes all store access.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?;

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

/// Create both tables if they do not already exist.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if a statement fails.
pub async fn migrate(pool: &SqlitePool) -> Result<(), RepositoryError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS products (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            name  TEXT NOT NULL,
            price TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    // UNIQUE(product_id) backs the one-line-per-product invariant
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS cart_lines (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            product_id INTEGER NOT NULL UNIQUE,
            quantity   INTEGER NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}
