//! The batch augmentation pipeline.
//!
//! Stages, composed sequentially per batch:
//! - **loader**: read staged files into in-memory pixel buffers
//! - **engine**: apply every catalog entry to every loaded image
//! - **organizer**: materialize outputs into the per-image directory tree
//! - **runner**: orchestrate one batch end-to-end
//!
//! Within a batch, all images load before any transform runs, and all
//! transforms finish before any file is written. There is no per-file
//! error state: bad inputs are skipped by the loader, everything else is
//! terminal for the batch.

pub mod engine;
pub mod loader;
pub mod organizer;
pub mod runner;

// Re-exports for convenient access
pub use engine::Engine;
pub use loader::Loader;
pub use organizer::Organizer;
pub use runner::BatchRunner;
