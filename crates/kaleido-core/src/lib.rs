//! Kaleido Core - Embeddable batch image augmentation library.
//!
//! Kaleido takes a directory of staged images, applies a fixed catalog of
//! randomized transformations to every image, and materializes the results
//! into a deterministic per-source directory tree ready for archival.
//!
//! # Architecture
//!
//! One batch flows through three sequential stages:
//!
//! ```text
//! Staging dir → Load → Augment (7-entry catalog) → Output tree
//! ```
//!
//! File naming is deterministic (`<stem>/<stem>_<transform>.jpg`); pixel
//! content is not, because every transform draws a fresh magnitude from the
//! engine's RNG. Seed the engine to reproduce a batch exactly.
//!
//! # Usage
//!
//! ```rust,ignore
//! use kaleido_core::{Config, Kaleido};
//!
//! fn main() -> kaleido_core::Result<()> {
//!     let config = Config::load()?;
//!     let kaleido = Kaleido::new(config);
//!
//!     let summary = kaleido.run_batch()?;
//!     println!("Wrote {} files", summary.outputs_written);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod catalog;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use catalog::{Catalog, Transform};
pub use config::Config;
pub use error::{ConfigError, KaleidoError, PipelineError, PipelineResult, Result};
pub use pipeline::{BatchRunner, Engine, Loader, Organizer};
pub use types::{AugmentedOutput, BatchSummary, ImageRecord};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Kaleido processor - the main entry point for batch augmentation.
pub struct Kaleido {
    config: Config,
}

impl Kaleido {
    /// Create a new Kaleido instance with the given configuration.
    pub fn new(config: Config) -> Self {
        tracing::debug!("Initializing Kaleido v{}", VERSION);
        Self { config }
    }

    /// Create a new Kaleido instance with default configuration.
    pub fn with_defaults() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self::new(config))
    }

    /// Get a reference to the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one batch over the configured staging directory.
    pub fn run_batch(&self) -> Result<BatchSummary> {
        BatchRunner::new(&self.config).run()
    }
}
