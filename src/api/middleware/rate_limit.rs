//! Rate limiting middleware using token bucket algorithm.

use anyhow::Context;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Replenish rate of the per-IP bucket, in requests per second.
pub const PER_SECOND: u64 = 5;

/// Requests a client may send in a burst before being throttled.
pub const BURST_SIZE: u32 = 50;

pub type StatsGovernorLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates the rate limiter for the statistics endpoints.
///
/// Every statistic fans out into many record store requests, so clients are
/// held to [`PER_SECOND`] requests per second with bursts of [`BURST_SIZE`].
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the router must be served with connect info.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .nest("/api/stats", stats_routes())
///     .layer(rate_limit::layer()?);
/// ```
pub fn layer() -> anyhow::Result<StatsGovernorLayer> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(PER_SECOND)
        .burst_size(BURST_SIZE)
        .finish()
        .context("Rate limit period and burst size must be non-zero")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
