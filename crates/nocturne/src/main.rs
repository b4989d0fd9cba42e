//! Nocturne CLI binary.
//!
//! Command-line access to the story-generation service:
//! - Generate a story from a quote
//! - List stories in the corpus
//! - Show a story by sequential id

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_generate, run_list, run_show};

    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Generate {
            quote,
            source_material,
            inspiration,
        } => {
            run_generate(quote, source_material, inspiration).await?;
        }

        Commands::List => {
            run_list().await?;
        }

        Commands::Show { id } => {
            run_show(id).await?;
        }
    }

    Ok(())
}
