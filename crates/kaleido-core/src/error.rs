//! Error types for the Kaleido augmentation pipeline.
//!
//! Errors are organized by stage to provide clear, actionable error messages
//! that include relevant context (directory paths, file paths, specific issues).

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for Kaleido operations.
#[derive(Error, Debug)]
pub enum KaleidoError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Batch pipeline errors
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors (batch summary output)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Batch pipeline errors, organized by stage.
///
/// Per-file problems (undecodable or oversized staged files) are not errors:
/// the loader skips them. Everything here is terminal for the whole batch.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Staging directory could not be enumerated
    #[error("Cannot read staging directory {path}: {message}")]
    StagingUnreadable { path: PathBuf, message: String },

    /// No decodable images were found in staging
    #[error("No decodable images in staging directory: {staging_dir}")]
    EmptyBatch { staging_dir: PathBuf },

    /// Failed to wipe or create part of the output tree
    #[error("Output tree error at {path}: {message}")]
    OutputIo { path: PathBuf, message: String },

    /// Failed to encode an augmented buffer to the output format
    #[error("Encode error for {path}: {message}")]
    Encode { path: PathBuf, message: String },
}

/// Convenience type alias for Kaleido results.
pub type Result<T> = std::result::Result<T, KaleidoError>;

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
