//! Rate limiting for Nocturne LLM drivers.
//!
//! External generation calls are quota-bearing and cost-bearing, so a
//! limiter sits in front of the driver wherever throttling is needed.
//! Drivers advertise conservative defaults through
//! [`RateLimitConfig`]; callers construct a [`RateLimiter`] from that
//! config and acquire a permit before each call.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod limiter;

pub use config::RateLimitConfig;
pub use limiter::{RateLimiter, RateLimiterGuard};
