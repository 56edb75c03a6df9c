use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

pub mod commands;
pub mod controller;
pub mod logging;
pub mod profile;
pub mod speech;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::state::AppState;

/// Vocabulary flashcards from word lists and source documents
#[derive(Parser, Debug)]
#[command(name = "wordcard")]
#[command(version)]
struct Cli {
    /// Config file, defaults to the user config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add words from a YAML/JSON document or a CSV word list
    Import {
        file: PathBuf,
        /// Only import rows of this CSV chapter
        #[arg(long)]
        chapter: Option<String>,
    },
    /// Write a definition column into a CSV word list
    Enrich {
        csv: PathBuf,
        /// Write here instead of overwriting the input
        #[arg(long)]
        output: Option<PathBuf>,
        /// Ask the online dictionary for words without a usable meaning
        #[arg(long)]
        remote: bool,
    },
    /// Show the chapters of a CSV word list
    Chapters { csv: PathBuf },
    /// Print the stored words
    List {
        #[arg(long)]
        unknown: bool,
    },
    /// Review flashcards interactively
    Study {
        #[arg(long)]
        unknown: bool,
        /// Zero-based card to start at
        #[arg(long, default_value_t = 0)]
        start: usize,
    },
    /// Mark every word unknown again
    Reset {
        #[arg(long)]
        yes: bool,
    },
    /// Delete every stored word
    Clear {
        #[arg(long)]
        yes: bool,
    },
    /// Read text aloud
    Speak { text: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Ignoring unreadable .env file: {e}");
        }
    }

    let cli = Cli::parse();
    logging::init(cli.json_logs);

    let config = profile::load_config(cli.config.as_deref()).context("Failed to load config")?;
    tracing::debug!("Using word slot {}", config.storage.slot_path().display());

    let state = AppState::new(config);
    run(&state, cli.command).await
}

async fn run(state: &AppState, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Import { file, chapter } => {
            commands::import::run(state, &file, chapter.as_deref()).await
        }
        Command::Enrich {
            csv,
            output,
            remote,
        } => commands::enrich::run(state, &csv, output.as_deref(), remote).await,
        Command::Chapters { csv } => commands::chapters::run(&csv),
        Command::List { unknown } => commands::list::run(state, unknown),
        Command::Study { unknown, start } => commands::study::run(state, unknown, start).await,
        Command::Reset { yes } => commands::manage::reset(state, yes),
        Command::Clear { yes } => commands::manage::clear(state, yes),
        Command::Speak { text } => commands::speak::run(state, &text).await,
    }
}
