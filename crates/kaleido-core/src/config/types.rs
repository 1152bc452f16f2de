//! Sub-configuration structs with defaults matching the service layout.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Staging and output directory locations.
///
/// Both directories are batch-scoped handoff points: the upload collaborator
/// fills `staging_dir` before a batch, the archival collaborator drains
/// `output_dir` after it. Paths support `~` expansion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory the upload collaborator deposits files into
    pub staging_dir: PathBuf,

    /// Root of the output tree consumed by the archival collaborator
    pub output_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            staging_dir: PathBuf::from("uploads"),
            output_dir: PathBuf::from("augmented"),
        }
    }
}

/// Image loading settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Recognized input extensions (case-insensitive)
    pub supported_formats: Vec<String>,

    /// Staged files larger than this are skipped
    pub max_file_size_mb: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            supported_formats: vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()],
            max_file_size_mb: 50,
        }
    }
}

/// Output encoding settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodingConfig {
    /// Output file extension ("jpg" or "jpeg")
    pub format: String,

    /// JPEG quality (1-100)
    pub jpeg_quality: u8,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            format: "jpg".to_string(),
            jpeg_quality: 90,
        }
    }
}

/// Augmentation engine settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for the transform magnitude RNG.
    /// Unset means a fresh entropy-derived seed per batch.
    pub seed: Option<u64>,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
