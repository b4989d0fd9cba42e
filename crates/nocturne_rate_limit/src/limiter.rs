//! Token-bucket limiter with a concurrency cap.

use crate::RateLimitConfig;
use governor::{DefaultDirectRateLimiter, Quota};
use nocturne_error::{ConfigError, NocturneResult};
use std::num::NonZeroU32;
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tracing::debug;

/// Limiter combining a per-minute request quota with a cap on
/// concurrent in-flight requests.
///
/// Daily caps and token-per-minute budgets from [`RateLimitConfig`]
/// are advisory here; the per-minute request quota and the concurrency
/// cap are enforced.
#[derive(Debug)]
pub struct RateLimiter {
    quota: DefaultDirectRateLimiter,
    concurrency: Arc<Semaphore>,
}

/// Permit held for the duration of one external call.
///
/// Dropping the guard releases the concurrency slot.
#[derive(Debug)]
pub struct RateLimiterGuard {
    _permit: OwnedSemaphorePermit,
}

impl RateLimiter {
    /// Build a limiter from a config.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when either cap is zero.
    pub fn new(config: &RateLimitConfig) -> NocturneResult<Self> {
        let rpm = NonZeroU32::new(config.requests_per_minute)
            .ok_or_else(|| ConfigError::new("requests_per_minute must be non-zero"))?;
        if config.max_concurrent == 0 {
            return Err(ConfigError::new("max_concurrent must be non-zero").into());
        }
        Ok(Self {
            quota: governor::RateLimiter::direct(Quota::per_minute(rpm)),
            concurrency: Arc::new(Semaphore::new(config.max_concurrent as usize)),
        })
    }

    /// Wait until the quota admits another request, then claim a
    /// concurrency slot. Hold the returned guard across the call.
    pub async fn acquire(&self) -> NocturneResult<RateLimiterGuard> {
        self.quota.until_ready().await;
        let permit = self
            .concurrency
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| ConfigError::new(format!("limiter semaphore closed: {}", e)))?;
        debug!("rate limiter permit acquired");
        Ok(RateLimiterGuard { _permit: permit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn admits_up_to_max_concurrent() {
        let config = RateLimitConfig {
            requests_per_minute: 100,
            tokens_per_minute: 100_000,
            requests_per_day: 10_000,
            max_concurrent: 2,
        };
        let limiter = RateLimiter::new(&config).unwrap();

        let first = limiter.acquire().await.unwrap();
        let _second = limiter.acquire().await.unwrap();
        // Both slots taken; a third acquire would park until one drops.
        assert_eq!(limiter.concurrency.available_permits(), 0);

        drop(first);
        assert_eq!(limiter.concurrency.available_permits(), 1);
    }

    #[test]
    fn rejects_zero_caps() {
        let mut config = RateLimitConfig::default();
        config.requests_per_minute = 0;
        assert!(RateLimiter::new(&config).is_err());

        let mut config = RateLimitConfig::default();
        config.max_concurrent = 0;
        assert!(RateLimiter::new(&config).is_err());
    }
}
