//! Story generation orchestration.

use crate::prompts::{
    CONFIG_ERROR_MESSAGE, DEFAULT_RETRY_CEILING, FALLBACK_NARRATIVE, INVALID_INPUT_MESSAGE,
    NARRATIVE_MAX_TOKENS, UNIQUENESS_SUFFIX, narrative_prompt,
};
use crate::{DuplicateChecker, PlotSummarizer, StoryRequest, StoryResponse, segment_story};
use nocturne_core::GenerateRequest;
use nocturne_error::{NocturneResult, StoryError, StoryErrorKind};
use nocturne_interface::NocturneDriver;
use tracing::{debug, error, instrument, warn};

/// Orchestrates the story-generation pipeline.
///
/// One call runs: prompt construction, narrative generation,
/// summarization, duplicate checking, and segmentation. On a
/// duplicate plot the quote is amended with a uniqueness clause and
/// the attempt repeats against the same plot snapshot, up to the
/// retry ceiling; when the ceiling is exhausted the last narrative is
/// accepted anyway. Uniqueness is a best-effort quality goal, not a
/// correctness constraint.
///
/// The generator never persists anything; callers save accepted
/// stories through their own [`nocturne_interface::CorpusRepository`].
#[derive(Debug)]
pub struct StoryGenerator<D: NocturneDriver> {
    driver: D,
    retry_ceiling: usize,
}

impl<D: NocturneDriver> StoryGenerator<D> {
    /// Create a generator with the default retry ceiling.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            retry_ceiling: DEFAULT_RETRY_CEILING,
        }
    }

    /// Create a generator with an explicit retry ceiling.
    ///
    /// # Errors
    ///
    /// Fails when `retry_ceiling` is zero, which would permit no
    /// attempts at all.
    pub fn with_retry_ceiling(driver: D, retry_ceiling: usize) -> NocturneResult<Self> {
        if retry_ceiling == 0 {
            return Err(StoryError::new(StoryErrorKind::ZeroRetryCeiling(retry_ceiling)).into());
        }
        Ok(Self {
            driver,
            retry_ceiling,
        })
    }

    /// The driver this generator calls.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Generate a story for the given request.
    ///
    /// `existing_plots` is the plot snapshot taken at the start of the
    /// top-level request; it is not refreshed between retries.
    ///
    /// The response is always presentable: either exactly ten ordered
    /// story parts with a plot summary, or a single in-character
    /// fallback line. Validation and configuration failures are
    /// reported before any driver call is made.
    #[instrument(skip(self, request, existing_plots), fields(existing = existing_plots.len()))]
    pub async fn generate(
        &self,
        request: &StoryRequest,
        existing_plots: &[String],
    ) -> StoryResponse {
        let mut quote = request.quote().trim().to_string();
        if quote.is_empty() {
            debug!("Rejected story request with empty quote");
            return StoryResponse::failure(INVALID_INPUT_MESSAGE);
        }

        if !self.driver.is_configured() {
            error!(
                provider = self.driver.provider_name(),
                "Generation credentials missing"
            );
            return StoryResponse::failure(CONFIG_ERROR_MESSAGE);
        }

        let inspiration = request.inspiration();
        let source_material = request.source_material().as_deref();
        let mut last_accepted: Option<(String, String)> = None;

        for attempt in 1..=self.retry_ceiling {
            let prompt = narrative_prompt(&quote, source_material, inspiration, existing_plots);
            let generate = GenerateRequest::from_prompt(prompt, NARRATIVE_MAX_TOKENS);

            let story = match self.driver.generate(&generate).await {
                Ok(response) => response.text().trim().to_string(),
                Err(e) => {
                    error!(attempt, error = %e, "Narrative generation failed");
                    return StoryResponse::failure(FALLBACK_NARRATIVE);
                }
            };

            let plot = PlotSummarizer::new(&self.driver).summarize(&story).await;
            let duplicate = DuplicateChecker::new(&self.driver)
                .is_duplicate(&plot, existing_plots)
                .await;

            if !duplicate {
                debug!(attempt, "Accepted narrative with distinct plot");
                return StoryResponse::success(segment_story(&story), plot);
            }

            warn!(attempt, "Generated plot duplicates an existing story");
            last_accepted = Some((story, plot));
            quote.push_str(UNIQUENESS_SUFFIX);
        }

        match last_accepted {
            Some((story, plot)) => {
                warn!(
                    retry_ceiling = self.retry_ceiling,
                    "Retry ceiling exhausted, accepting possibly-duplicate narrative"
                );
                StoryResponse::success(segment_story(&story), plot)
            }
            None => StoryResponse::failure(FALLBACK_NARRATIVE),
        }
    }
}
