//! The `kaleido run` command: execute one augmentation batch.

use clap::{Args, ValueEnum};
use kaleido_core::{BatchRunner, Config};
use std::path::PathBuf;

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Staging directory to read images from (overrides config)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output root to write the augmented tree under (overrides config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed for the transform magnitude RNG (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// JPEG quality for output files, 1-100 (overrides config)
    #[arg(long)]
    pub quality: Option<u8>,

    /// Summary output format
    #[arg(long, value_enum, default_value = "human")]
    pub summary_format: SummaryFormat,
}

/// How to print the batch summary.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SummaryFormat {
    /// Readable multi-line summary
    Human,
    /// Single JSON object on stdout
    Json,
}

/// Execute the run command.
pub fn execute(args: RunArgs, mut config: Config) -> anyhow::Result<()> {
    if let Some(input) = args.input {
        config.storage.staging_dir = input;
    }
    if let Some(output) = args.output {
        config.storage.output_dir = output;
    }
    if let Some(quality) = args.quality {
        anyhow::ensure!(
            (1..=100).contains(&quality),
            "--quality must be between 1 and 100"
        );
        config.encoding.jpeg_quality = quality;
    }
    if args.seed.is_some() {
        config.engine.seed = args.seed;
    }
    anyhow::ensure!(
        config.storage.staging_dir != config.storage.output_dir,
        "staging and output directories must differ"
    );

    tracing::info!(
        "Running batch: {} -> {}",
        config.staging_dir().display(),
        config.output_dir().display()
    );

    let pb = create_progress_bar();
    let summary = BatchRunner::new(&config).run_with_progress(|done, total| {
        if pb.length() != Some(total as u64) {
            pb.set_length(total as u64);
        }
        pb.set_position(done as u64);
    })?;
    pb.finish_and_clear();

    match args.summary_format {
        SummaryFormat::Human => print_summary(&summary, &config),
        SummaryFormat::Json => println!("{}", summary.to_json(true)?),
    }

    Ok(())
}

/// Create a progress bar for the transform phase.
///
/// The length is unknown until loading finishes, so it starts at zero and is
/// stretched by the first progress callback.
fn create_progress_bar() -> indicatif::ProgressBar {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
            )
            .unwrap()
            .progress_chars("##-"),
    );
    pb.set_message("augmenting...");
    pb
}

/// Print a formatted summary after the batch completes.
fn print_summary(summary: &kaleido_core::BatchSummary, config: &Config) {
    println!("Batch complete");
    println!("  Images:        {}", summary.images);
    println!("  Skipped files: {}", summary.skipped_files);
    println!("  Transforms:    {}", summary.transforms);
    println!("  Files written: {}", summary.outputs_written);
    println!("  Elapsed:       {}ms", summary.elapsed_ms);
    println!("  Output tree:   {}", config.output_dir().display());
}
