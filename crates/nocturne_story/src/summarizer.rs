//! Plot summarization.

use crate::prompts::{FALLBACK_SUMMARY, SUMMARY_MAX_TOKENS, summary_prompt};
use nocturne_core::GenerateRequest;
use nocturne_interface::NocturneDriver;
use tracing::{instrument, warn};

/// Reduces a full narrative to a one-sentence plot summary.
///
/// Summarization failure never aborts story generation: on a driver
/// error the fixed [`FALLBACK_SUMMARY`] is returned so downstream
/// duplicate comparison can still proceed against a placeholder.
#[derive(Debug, derive_new::new)]
pub struct PlotSummarizer<'a, D: NocturneDriver> {
    driver: &'a D,
}

impl<D: NocturneDriver> PlotSummarizer<'_, D> {
    /// Summarize a story into a single concise sentence.
    #[instrument(skip(self, story_text), fields(story_len = story_text.len()))]
    pub async fn summarize(&self, story_text: &str) -> String {
        let request = GenerateRequest::from_prompt(summary_prompt(story_text), SUMMARY_MAX_TOKENS);

        match self.driver.generate(&request).await {
            Ok(response) => response.text().trim().to_string(),
            Err(e) => {
                warn!(error = %e, "Summarization failed, using fallback summary");
                FALLBACK_SUMMARY.to_string()
            }
        }
    }
}
