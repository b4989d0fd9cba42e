//! Configuration structures for rate limiting.

use serde::{Deserialize, Serialize};

/// Rate limit caps for a single provider/model pair.
///
/// Const-constructible so drivers can advertise static defaults.
///
/// # Examples
///
/// ```
/// use nocturne_rate_limit::RateLimitConfig;
///
/// static LIMITS: RateLimitConfig = RateLimitConfig {
///     requests_per_minute: 50,
///     tokens_per_minute: 40_000,
///     requests_per_day: 1_000,
///     max_concurrent: 4,
/// };
///
/// assert_eq!(LIMITS.requests_per_minute, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Requests per minute limit
    pub requests_per_minute: u32,
    /// Tokens per minute limit
    pub tokens_per_minute: u64,
    /// Requests per day limit
    pub requests_per_day: u32,
    /// Maximum concurrent in-flight requests
    pub max_concurrent: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        // Conservative enough for the lowest paid tiers of the major
        // chat-completions providers.
        Self {
            requests_per_minute: 60,
            tokens_per_minute: 90_000,
            requests_per_day: 10_000,
            max_concurrent: 4,
        }
    }
}
