//! CLI argument parsing and command handlers.

mod commands;
mod run;

pub use commands::{Cli, Commands};
pub use run::{run_generate, run_list, run_show};
