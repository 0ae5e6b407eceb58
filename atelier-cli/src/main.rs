//! Atelier — edit remote studio objects in a local editor.
//!
//! # Usage
//!
//! ```text
//! atelier open recipe <project> <name>
//! atelier open webapp <project> <id>
//! atelier open wiki-article <project> <article-id>
//! atelier open plugin-file <plugin> <path>
//! atelier open library-file <project> <path>
//! atelier save <staged-path>
//! atelier run <project> <recipe> [--partition <spec>]
//! atelier abort <project> <recipe> [--job-id <id>]
//! atelier clean
//! ```

mod commands;
mod context;
mod prompts;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    abort::AbortArgs, clean::CleanArgs, open::OpenCommand, run::RunArgs, save::SaveArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "atelier",
    version,
    about = "Edit studio recipes, webapps, wiki articles and plugin files locally",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch a remote object and stage it for local editing.
    Open {
        #[command(subcommand)]
        command: OpenCommand,
    },

    /// Push a locally edited staged file back to the studio.
    Save(SaveArgs),

    /// Build a recipe's output and stream the job log.
    Run(RunArgs),

    /// Abort the last job started for a recipe.
    Abort(AbortArgs),

    /// Tear down: purge the staging cache and forget open documents.
    Clean(CleanArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Open { command } => commands::open::run(command).await,
        Commands::Save(args) => args.run().await,
        Commands::Run(args) => args.run().await,
        Commands::Abort(args) => args.run().await,
        Commands::Clean(args) => args.run(),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
