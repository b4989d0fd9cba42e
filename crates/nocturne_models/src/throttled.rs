//! Rate-limited driver decorator.

use async_trait::async_trait;
use nocturne_core::{GenerateRequest, GenerateResponse};
use nocturne_error::NocturneResult;
use nocturne_interface::NocturneDriver;
use nocturne_rate_limit::{RateLimitConfig, RateLimiter};
use tracing::instrument;

/// Wraps a driver so every call first clears the provider's quota and
/// claims a concurrency slot.
///
/// Orchestration code stays unaware of throttling; substituting
/// `Throttled<D>` for `D` at the wiring layer is the whole change.
#[derive(Debug)]
pub struct Throttled<D: NocturneDriver> {
    driver: D,
    limiter: RateLimiter,
}

impl<D: NocturneDriver> Throttled<D> {
    /// Wrap a driver using its own advertised rate limits.
    ///
    /// # Errors
    ///
    /// Fails when the advertised limits are unusable (zero caps).
    pub fn new(driver: D) -> NocturneResult<Self> {
        let limiter = RateLimiter::new(driver.rate_limits())?;
        Ok(Self { driver, limiter })
    }

    /// Wrap a driver with explicit limits.
    ///
    /// # Errors
    ///
    /// Fails when the limits are unusable (zero caps).
    pub fn with_limits(driver: D, config: &RateLimitConfig) -> NocturneResult<Self> {
        let limiter = RateLimiter::new(config)?;
        Ok(Self { driver, limiter })
    }
}

#[async_trait]
impl<D: NocturneDriver> NocturneDriver for Throttled<D> {
    #[instrument(skip(self, req), fields(provider = self.driver.provider_name()))]
    async fn generate(&self, req: &GenerateRequest) -> NocturneResult<GenerateResponse> {
        let _guard = self.limiter.acquire().await?;
        self.driver.generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        self.driver.provider_name()
    }

    fn model_name(&self) -> &str {
        self.driver.model_name()
    }

    fn rate_limits(&self) -> &RateLimitConfig {
        self.driver.rate_limits()
    }

    fn is_configured(&self) -> bool {
        self.driver.is_configured()
    }
}
