//! Per-IP rate limiting for the public catalog pages.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Sustained request rate allowed per client IP.
const REQUESTS_PER_SECOND: u64 = 5;

/// Burst capacity above the sustained rate.
///
/// Generous enough for a person clicking through the catalog with all
/// page assets in flight; scrapers hammering the listing pages receive
/// `429 Too Many Requests`.
const BURST_SIZE: u32 = 100;

/// Token-bucket limiter keyed by the socket peer address.
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    let config = GovernorConfigBuilder::default()
        .per_second(REQUESTS_PER_SECOND)
        .burst_size(BURST_SIZE)
        .finish()
        .unwrap();

    GovernorLayer::new(Arc::new(config))
}
