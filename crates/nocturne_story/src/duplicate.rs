//! Semantic duplicate detection over plot summaries.

use crate::prompts::{COMPARISON_MAX_TOKENS, comparison_prompt};
use nocturne_core::GenerateRequest;
use nocturne_interface::NocturneDriver;
use tracing::{debug, instrument, warn};

/// Compares a candidate plot summary pairwise against existing plots.
///
/// Cost model: one driver call per existing plot, short-circuiting on
/// the first match. This O(n) scan is the dominant scalability
/// constraint of the pipeline; the comparisons are stateless, so a
/// future implementation may fan them out under a concurrency cap.
#[derive(Debug, derive_new::new)]
pub struct DuplicateChecker<'a, D: NocturneDriver> {
    driver: &'a D,
}

impl<D: NocturneDriver> DuplicateChecker<'_, D> {
    /// Whether `candidate` tells the same story as any existing plot.
    ///
    /// An empty plot set returns false without any driver call. A
    /// failed comparison counts as "not a duplicate" for that pair
    /// and the scan continues.
    #[instrument(skip(self, candidate, existing), fields(existing = existing.len()))]
    pub async fn is_duplicate(&self, candidate: &str, existing: &[String]) -> bool {
        if existing.is_empty() {
            return false;
        }

        for (index, plot) in existing.iter().enumerate() {
            let request = GenerateRequest::from_prompt(
                comparison_prompt(candidate, plot),
                COMPARISON_MAX_TOKENS,
            );

            match self.driver.generate(&request).await {
                Ok(response) => {
                    if is_affirmative(response.text()) {
                        debug!(index, "Candidate plot matches an existing plot");
                        return true;
                    }
                }
                Err(e) => {
                    warn!(index, error = %e, "Plot comparison failed, treating pair as distinct");
                }
            }
        }

        false
    }
}

/// Whether a comparison answer is a strict "yes" after trimming and
/// case-folding. Anything else counts as a negative.
fn is_affirmative(answer: &str) -> bool {
    answer.trim().to_lowercase() == "yes"
}
