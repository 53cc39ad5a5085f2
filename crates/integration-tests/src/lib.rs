//! Integration tests for Gizmo Shack.
//!
//! Each test spawns the full storefront app on an ephemeral port with its
//! own in-memory database, then drives it over real HTTP with `reqwest`.
//! No external services are required.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p gizmo-shack-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::{IpAddr, Ipv4Addr};

use gizmo_shack_storefront::config::StorefrontConfig;
use gizmo_shack_storefront::db::{self, CatalogRepository};
use gizmo_shack_storefront::state::AppState;

/// A running storefront instance bound to an ephemeral port.
pub struct TestApp {
    /// Base URL of the spawned server, e.g. `http://127.0.0.1:49152`.
    pub base_url: String,
    /// HTTP client for driving the server.
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn a fully migrated and seeded storefront on an ephemeral port.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot be built; tests have no graceful path.
    pub async fn spawn() -> Self {
        let config = StorefrontConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            database_url: "sqlite::memory:".to_string(),
        };

        let pool = db::create_pool(&config.database_url)
            .await
            .expect("Failed to create database pool");
        db::migrate(&pool).await.expect("Failed to create tables");
        CatalogRepository::new(&pool)
            .seed()
            .await
            .expect("Failed to seed catalog");

        let addr = config.socket_addr();
        let state = AppState::new(config, pool);
        let app = gizmo_shack_storefront::app(state);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .expect("Failed to bind ephemeral port");
        let local_addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            base_url: format!("http://{local_addr}"),
            client: reqwest::Client::new(),
        }
    }

    /// Absolute URL for a path on the spawned server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
