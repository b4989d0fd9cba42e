//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Nocturne: quote-driven story generation.
#[derive(Debug, Parser)]
#[command(name = "nocturne", version, about)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a story from a quote
    Generate {
        /// The quote the narrative is built around
        quote: String,

        /// Book or text excerpt the story should draw from
        #[arg(long)]
        source_material: Option<String>,

        /// Persona/style override (default: Hannibal Lecter)
        #[arg(long)]
        inspiration: Option<String>,
    },

    /// List stories in the corpus
    List,

    /// Show a story by sequential id
    Show {
        /// Sequential story id
        id: i64,
    },
}
