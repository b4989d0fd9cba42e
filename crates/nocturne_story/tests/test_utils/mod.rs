//! Mock generation driver for pipeline tests.

use async_trait::async_trait;
use nocturne_core::{GenerateRequest, GenerateResponse};
use nocturne_error::{GenerationError, GenerationErrorKind, NocturneResult};
use nocturne_interface::NocturneDriver;
use nocturne_rate_limit::RateLimitConfig;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A scripted reply for one mock call.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return the given text
    Text(String),
    /// Fail with a timeout error
    Fail,
}

impl MockReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    fn resolve(&self) -> NocturneResult<GenerateResponse> {
        match self {
            Self::Text(text) => Ok(GenerateResponse::new(text.clone())),
            Self::Fail => Err(GenerationError::new(GenerationErrorKind::Timeout).into()),
        }
    }
}

/// Mock driver that dispatches on the prompt kind.
///
/// Narrative, summary, and comparison prompts are distinguished by
/// their fixed instruction prefixes, so one mock serves the whole
/// pipeline. Per-kind call counts let tests verify the external-call
/// economy the pipeline promises.
pub struct MockDriver {
    narrative_reply: MockReply,
    summary_reply: MockReply,
    comparison_script: Mutex<VecDeque<MockReply>>,
    default_comparison: MockReply,
    configured: bool,
    narrative_calls: AtomicUsize,
    summary_calls: AtomicUsize,
    comparison_calls: AtomicUsize,
}

impl MockDriver {
    /// A driver answering every comparison with "no".
    pub fn new(narrative: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            narrative_reply: MockReply::text(narrative),
            summary_reply: MockReply::text(summary),
            comparison_script: Mutex::new(VecDeque::new()),
            default_comparison: MockReply::text("no"),
            configured: true,
            narrative_calls: AtomicUsize::new(0),
            summary_calls: AtomicUsize::new(0),
            comparison_calls: AtomicUsize::new(0),
        }
    }

    /// Replace the narrative reply.
    #[allow(dead_code)]
    pub fn with_narrative_reply(mut self, reply: MockReply) -> Self {
        self.narrative_reply = reply;
        self
    }

    /// Replace the summary reply.
    #[allow(dead_code)]
    pub fn with_summary_reply(mut self, reply: MockReply) -> Self {
        self.summary_reply = reply;
        self
    }

    /// Queue comparison replies consumed in order; once the script is
    /// exhausted the default comparison reply is used.
    #[allow(dead_code)]
    pub fn with_comparison_script(self, replies: Vec<MockReply>) -> Self {
        *self.comparison_script.lock().unwrap() = replies.into();
        self
    }

    /// Replace the default comparison reply.
    #[allow(dead_code)]
    pub fn with_default_comparison(mut self, reply: MockReply) -> Self {
        self.default_comparison = reply;
        self
    }

    /// Mark the driver's credentials as absent.
    #[allow(dead_code)]
    pub fn unconfigured(mut self) -> Self {
        self.configured = false;
        self
    }

    #[allow(dead_code)]
    pub fn narrative_calls(&self) -> usize {
        self.narrative_calls.load(Ordering::SeqCst)
    }

    #[allow(dead_code)]
    pub fn summary_calls(&self) -> usize {
        self.summary_calls.load(Ordering::SeqCst)
    }

    #[allow(dead_code)]
    pub fn comparison_calls(&self) -> usize {
        self.comparison_calls.load(Ordering::SeqCst)
    }

    #[allow(dead_code)]
    pub fn total_calls(&self) -> usize {
        self.narrative_calls() + self.summary_calls() + self.comparison_calls()
    }
}

#[async_trait]
impl NocturneDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> NocturneResult<GenerateResponse> {
        let prompt = req
            .messages()
            .first()
            .map(|message| message.content().as_str())
            .unwrap_or_default();

        if prompt.starts_with("Compare these two plot summaries") {
            self.comparison_calls.fetch_add(1, Ordering::SeqCst);
            let scripted = self.comparison_script.lock().unwrap().pop_front();
            scripted.unwrap_or_else(|| self.default_comparison.clone()).resolve()
        } else if prompt.starts_with("Summarize the following story") {
            self.summary_calls.fetch_add(1, Ordering::SeqCst);
            self.summary_reply.resolve()
        } else {
            self.narrative_calls.fetch_add(1, Ordering::SeqCst);
            self.narrative_reply.resolve()
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }

    fn rate_limits(&self) -> &RateLimitConfig {
        static LIMITS: RateLimitConfig = RateLimitConfig {
            requests_per_minute: 1_000,
            tokens_per_minute: 1_000_000,
            requests_per_day: 100_000,
            max_concurrent: 16,
        };
        &LIMITS
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}
