//! Gizmo Shack Storefront - mock e-commerce JSON API.
//!
//! This binary serves the storefront API on port 5000.
//!
//! # Architecture
//!
//! - Axum web framework, JSON-only surface
//! - In-memory SQLite via sqlx; both tables are recreated and reseeded on
//!   every start, so nothing survives a restart
//! - No authentication, no payment processing: the checkout receipt is a
//!   locally synthesized record

#![cfg_attr(not(test), forbid(unsafe_code))]

use gizmo_shack_storefront::config::StorefrontConfig;
use gizmo_shack_storefront::db::{self, CatalogRepository};
use gizmo_shack_storefront::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gizmo_shack_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Initialize database connection pool
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");
    tracing::info!("Database pool created");

    // The database is in-memory: tables and the catalog seed are created on
    // every start
    db::migrate(&pool).await.expect("Failed to create tables");
    CatalogRepository::new(&pool)
        .seed()
        .await
        .expect("Failed to seed catalog");

    // Build application state and router
    let addr = config.socket_addr();
    let state = AppState::new(config, pool);
    let app = gizmo_shack_storefront::app(state);

    // Start server
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
