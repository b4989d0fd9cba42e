//! Caller-side generation and persistence flow.
//!
//! The pipeline itself never writes to the corpus; this module is the
//! caller that snapshots existing plots, runs the generator, and
//! persists the accepted story with a sequential id read from the
//! current corpus size.

use nocturne_interface::{CorpusRepository, NewStory, NocturneDriver};
use nocturne_story::{StoryGenerator, StoryRequest, StoryResponse};
use tracing::{error, instrument};

/// Indicator attached when a story was generated but not persisted.
pub const DB_ERROR_MESSAGE: &str = "Story generated but not saved to database";

/// Generate a story and persist it to the corpus.
///
/// Reads the existing plot set once, before generation; retries inside
/// the generator run against that same snapshot. A persistence failure
/// never discards a generated narrative: the response still carries
/// the story parts, with [`DB_ERROR_MESSAGE`] attached.
///
/// # Errors
///
/// Fails only when the existing plot set cannot be read; every later
/// failure degrades into the returned [`StoryResponse`].
#[instrument(skip_all, fields(quote_len = request.quote().len()))]
pub async fn generate_and_store<D, R>(
    generator: &StoryGenerator<D>,
    corpus: &R,
    request: &StoryRequest,
) -> nocturne_error::NocturneResult<StoryResponse>
where
    D: NocturneDriver,
    R: CorpusRepository + ?Sized,
{
    let existing_plots = corpus.list_plot_summaries().await?;
    let response = generator.generate(request, &existing_plots).await;
    if !response.is_success() {
        return Ok(response);
    }

    let plot = response
        .plot()
        .clone()
        .unwrap_or_default();
    let source_material = request
        .source_material()
        .clone()
        .or_else(|| Some(response.story_parts().join(" ")));
    let style_inspiration = request.inspiration().to_string();

    let saved = async {
        let count = corpus.count_stories().await?;
        let story_id = count as i64 + 1;
        corpus
            .save_story(NewStory::new(
                story_id,
                source_material,
                plot,
                style_inspiration,
            ))
            .await
    }
    .await;

    match saved {
        Ok(record) => Ok(response.with_story_id(*record.story_id())),
        Err(e) => {
            error!(error = %e, "Failed to save generated story");
            Ok(response.with_db_error(DB_ERROR_MESSAGE))
        }
    }
}
