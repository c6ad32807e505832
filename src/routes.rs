//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check: record store reachability
//! - `/api/stats/*`      - Statistics endpoints (rate limited)
//! - anything else       - `404` JSON error body
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the statistics endpoints
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Errors
///
/// Returns an error if the rate limiter cannot be configured.
pub fn app_router(state: AppState) -> anyhow::Result<NormalizePath<Router>> {
    let stats_router = api::routes::stats_routes().layer(rate_limit::layer()?);

    let router = service_routes(stats_router)
        .with_state(state)
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}

/// Health check, `stats_router` under `/api/stats`, and the JSON 404
/// fallback.
pub fn service_routes(stats_router: Router<AppState>) -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api/stats", stats_router)
        .fallback(not_found_handler)
}
