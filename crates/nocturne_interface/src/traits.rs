//! Trait definitions for generation drivers and the corpus boundary.

use crate::{NewStory, StoryRecord};
use async_trait::async_trait;
use nocturne_core::{GenerateRequest, GenerateResponse};
use nocturne_error::NocturneResult;
use nocturne_rate_limit::RateLimitConfig;

/// Contract a text-generation provider must offer the pipeline.
///
/// Prompt in, text out, token-bounded. No retry at this layer; retry
/// policy belongs to callers. Every call consumes external quota, so
/// callers minimize calls and may place a
/// [`nocturne_rate_limit::RateLimiter`] in front of the driver.
#[async_trait]
pub trait NocturneDriver: Send + Sync {
    /// Generate model output for a single request.
    ///
    /// Fails when the provider is unreachable, rejects the request, or
    /// times out. The driver enforces its own timeout so no call
    /// blocks indefinitely.
    async fn generate(&self, req: &GenerateRequest) -> NocturneResult<GenerateResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4o").
    fn model_name(&self) -> &str;

    /// Conservative rate limits for this provider/model.
    fn rate_limits(&self) -> &RateLimitConfig;

    /// Whether the credentials this driver needs are present.
    ///
    /// The pipeline checks this before its first external call so a
    /// missing credential is reported without spending quota.
    fn is_configured(&self) -> bool {
        true
    }
}

/// Persistence boundary for generated stories.
///
/// The pipeline itself never writes here; callers read the existing
/// plot set before generating and persist accepted stories after.
#[async_trait]
pub trait CorpusRepository: Send + Sync {
    /// All plot summaries currently in the corpus, order-irrelevant.
    async fn list_plot_summaries(&self) -> NocturneResult<Vec<String>>;

    /// Number of stories in the corpus.
    async fn count_stories(&self) -> NocturneResult<u64>;

    /// Persist a story. Fails if the sequential id is already taken.
    async fn save_story(&self, story: NewStory) -> NocturneResult<StoryRecord>;

    /// Look up a story by its sequential id.
    async fn find_story(&self, story_id: i64) -> NocturneResult<Option<StoryRecord>>;

    /// All stories in the corpus, in insertion order.
    async fn list_stories(&self) -> NocturneResult<Vec<StoryRecord>>;
}
