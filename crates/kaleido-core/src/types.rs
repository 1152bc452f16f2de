//! Core data types flowing through the augmentation pipeline.

use image::RgbImage;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A staged image loaded into memory.
///
/// Produced by the loader, read-only afterwards, dropped at the end of the
/// batch. The pixel buffer is 8-bit RGB (height x width x 3).
#[derive(Debug, Clone)]
pub struct ImageRecord {
    /// Path of the staged source file
    pub source_path: PathBuf,

    /// Decoded pixel data
    pub pixels: RgbImage,
}

impl ImageRecord {
    /// The source filename without its extension.
    ///
    /// Used as the per-image output subdirectory and filename prefix.
    pub fn stem(&self) -> String {
        self.source_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("image")
            .to_string()
    }
}

/// One augmented buffer: the result of applying a single catalog entry to a
/// single source image.
///
/// Created by the engine, consumed exactly once by the organizer; after that
/// it only exists as a file on disk.
#[derive(Debug, Clone)]
pub struct AugmentedOutput {
    /// Source filename stem (extension stripped)
    pub source_stem: String,

    /// Catalog entry that produced this buffer
    pub transform: String,

    /// The augmented pixel data
    pub pixels: RgbImage,

    /// Destination path relative to the output root:
    /// `<stem>/<stem>_<transform>.<ext>`
    pub relative_path: PathBuf,
}

/// Summary of one completed batch run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BatchSummary {
    /// Staged files that decoded successfully
    pub images: usize,

    /// Staged files skipped (wrong extension, oversized, undecodable)
    pub skipped_files: usize,

    /// Catalog entries applied per image
    pub transforms: usize,

    /// Files written to the output tree (images x transforms)
    pub outputs_written: usize,

    /// Wall-clock batch duration in milliseconds
    pub elapsed_ms: u64,
}

impl BatchSummary {
    /// Serialize the summary to a JSON string.
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
