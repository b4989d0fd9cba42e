//! Command handlers.

use nocturne::service::generate_and_store;
use nocturne::{
    CorpusRepository, JsonCorpus, OpenAiClient, StoryGenerator, StoryRequest, StoryResponse,
    Throttled, prompts,
};
use tracing::error;

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Generate a story and print the transport-shaped result as JSON.
///
/// A missing API key is reported through the product's configuration
/// failure message rather than a raw error.
pub async fn run_generate(
    quote: String,
    source_material: Option<String>,
    inspiration: Option<String>,
) -> CliResult {
    let request = StoryRequest::new(quote, source_material, inspiration);
    let corpus = JsonCorpus::open_default().await?;

    let response = match OpenAiClient::from_env() {
        Ok(client) => {
            let generator = StoryGenerator::new(Throttled::new(client)?);
            generate_and_store(&generator, &corpus, &request).await?
        }
        Err(e) => {
            error!(error = %e, "Generation driver not configured");
            StoryResponse::failure(prompts::CONFIG_ERROR_MESSAGE)
        }
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// List every story in the corpus.
pub async fn run_list() -> CliResult {
    let corpus = JsonCorpus::open_default().await?;
    let stories = corpus.list_stories().await?;
    println!("{}", serde_json::to_string_pretty(&stories)?);
    Ok(())
}

/// Show one story by sequential id.
pub async fn run_show(id: i64) -> CliResult {
    let corpus = JsonCorpus::open_default().await?;
    match corpus.find_story(id).await? {
        Some(story) => println!("{}", serde_json::to_string_pretty(&story)?),
        None => println!("Story {} not found", id),
    }
    Ok(())
}
