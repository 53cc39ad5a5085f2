//! HTTP middleware stack for the storefront API.
//!
//! # Layer Order (bottom to top in Router)
//!
//! 1. `TraceLayer` (request tracing)
//! 2. CORS (wide-open; the API is consumed from browser origins)

use tower_http::cors::{Any, CorsLayer};

/// CORS layer permitting any origin, method, and headers.
///
/// The API carries no cookies or credentials, so the widest policy is
/// expressible here without `allow_credentials` conflicts.
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
