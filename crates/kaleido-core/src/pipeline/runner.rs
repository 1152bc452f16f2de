//! Batch orchestration: load, transform, write, one phase at a time.

use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{PipelineError, Result};
use crate::types::{AugmentedOutput, BatchSummary};

use super::engine::Engine;
use super::loader::Loader;
use super::organizer::Organizer;

/// Runs one batch end-to-end.
///
/// Phases run strictly in sequence: every image loads before the first
/// transform runs, and every transform finishes before the first output file
/// is written. A batch either reaches the final summary or fails as a whole;
/// there is no partial success.
///
/// Staging and output roots are values carried by the runner, not shared
/// globals. Running two batches against the same output root concurrently is
/// unsafe (one batch's wipe can destroy the other's writes) and unsupported.
pub struct BatchRunner {
    loader: Loader,
    engine: Engine,
    organizer: Organizer,
    staging_dir: PathBuf,
}

impl BatchRunner {
    /// Create a runner from configuration.
    ///
    /// The engine RNG uses `engine.seed` from config when set, fresh entropy
    /// otherwise.
    pub fn new(config: &Config) -> Self {
        let catalog = Catalog::standard();
        let engine = match config.engine.seed {
            Some(seed) => Engine::with_seed(catalog, config.encoding.format.clone(), seed),
            None => Engine::new(catalog, config.encoding.format.clone()),
        };
        Self {
            loader: Loader::new(config.loader.clone()),
            engine,
            organizer: Organizer::new(config.output_dir(), config.encoding.clone()),
            staging_dir: config.staging_dir(),
        }
    }

    /// Create a runner with an explicit RNG seed, overriding config.
    pub fn with_seed(config: &Config, seed: u64) -> Self {
        let mut config = config.clone();
        config.engine.seed = Some(seed);
        Self::new(&config)
    }

    /// Execute one batch and return its summary.
    pub fn run(&mut self) -> Result<BatchSummary> {
        self.run_with_progress(|_, _| {})
    }

    /// Execute one batch, reporting `(done, total)` after each image is
    /// transformed.
    pub fn run_with_progress(
        &mut self,
        mut progress: impl FnMut(usize, usize),
    ) -> Result<BatchSummary> {
        let start = std::time::Instant::now();
        tracing::debug!("Batch starting: staging {:?}", self.staging_dir);

        // Loading
        let load_start = std::time::Instant::now();
        let batch = self.loader.load_batch(&self.staging_dir)?;
        tracing::trace!("  Load: {:?}", load_start.elapsed());

        // An empty batch fails before the output tree is touched, so a
        // previous batch's results survive a bad upload.
        if batch.records.is_empty() {
            return Err(PipelineError::EmptyBatch {
                staging_dir: self.staging_dir.clone(),
            }
            .into());
        }

        // Transforming
        let transform_start = std::time::Instant::now();
        let total = batch.records.len();
        let mut outputs: Vec<AugmentedOutput> =
            Vec::with_capacity(total * self.engine.transform_count());
        for (i, record) in batch.records.iter().enumerate() {
            outputs.extend(self.engine.augment_one(record));
            progress(i + 1, total);
        }
        tracing::trace!("  Transform: {:?}", transform_start.elapsed());

        // Writing
        let write_start = std::time::Instant::now();
        let written = self.organizer.write_batch(&outputs)?;
        tracing::trace!("  Write: {:?}", write_start.elapsed());

        let elapsed = start.elapsed();
        tracing::debug!(
            "Batch complete: {} image(s), {} output(s) in {:?}",
            total,
            written,
            elapsed
        );

        Ok(BatchSummary {
            images: total,
            skipped_files: batch.skipped,
            transforms: self.engine.transform_count(),
            outputs_written: written,
            elapsed_ms: elapsed.as_millis() as u64,
        })
    }
}
