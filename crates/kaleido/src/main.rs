//! Kaleido CLI - Batch image augmentation with a fixed transform catalog.
//!
//! Kaleido loads every staged image, applies seven randomized
//! transformations to each, and writes the results into a per-source
//! output tree ready for archival.
//!
//! # Usage
//!
//! ```bash
//! # Run one batch over the configured directories
//! kaleido run
//!
//! # Override directories and pin the RNG seed
//! kaleido run --input ./uploads --output ./augmented --seed 42
//!
//! # List the transform catalog
//! kaleido catalog
//!
//! # View configuration
//! kaleido config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Kaleido - Batch image augmentation pipeline.
#[derive(Parser, Debug)]
#[command(name = "kaleido")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one augmentation batch over the staged images
    Run(cli::run::RunArgs),

    /// List the transform catalog and parameter ranges
    Catalog,

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging from config, with CLI verbose override.
    // Note: logging isn't initialized yet, so use eprintln for config warnings.
    let config = match kaleido_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `kaleido config path`."
            );
            kaleido_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Kaleido v{}", kaleido_core::VERSION);

    // Dispatch to the appropriate command handler
    match cli.command {
        Commands::Run(args) => cli::run::execute(args, config),
        Commands::Catalog => cli::catalog::execute(),
        Commands::Config(args) => cli::config::execute(args),
    }
}
