//! Image source loader: staged files to in-memory pixel buffers.

use std::path::Path;

use image::RgbImage;
use walkdir::WalkDir;

use crate::config::LoaderConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::types::ImageRecord;

/// Loads the staged batch into memory.
///
/// Files that are not eligible (unrecognized extension), too large, or fail
/// to decode are skipped with a warning; they never fail the batch. An empty
/// result is the caller's signal for batch-level failure.
pub struct Loader {
    config: LoaderConfig,
}

/// What the loader found in staging.
pub struct LoadedBatch {
    /// Successfully decoded images, in path order
    pub records: Vec<ImageRecord>,
    /// Entries skipped (ineligible, oversized or undecodable)
    pub skipped: usize,
}

impl Loader {
    /// Create a new loader with the given configuration.
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load every decodable image staged under `staging_dir`.
    ///
    /// The staging directory is enumerated flat (the upload collaborator
    /// deposits a flat set of files) and in sorted path order so batch
    /// ordering is deterministic. A missing staging directory is treated as
    /// an empty batch, not an error.
    pub fn load_batch(&self, staging_dir: &Path) -> PipelineResult<LoadedBatch> {
        if !staging_dir.exists() {
            tracing::debug!("Staging directory {:?} does not exist", staging_dir);
            return Ok(LoadedBatch {
                records: Vec::new(),
                skipped: 0,
            });
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(staging_dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| PipelineError::StagingUnreadable {
                path: staging_dir.to_path_buf(),
                message: e.to_string(),
            })?;
            if entry.file_type().is_file() {
                paths.push(entry.into_path());
            }
        }
        paths.sort();

        let mut records = Vec::new();
        let mut skipped = 0;
        for path in paths {
            match self.load_one(&path) {
                Some(pixels) => records.push(ImageRecord {
                    source_path: path,
                    pixels,
                }),
                None => skipped += 1,
            }
        }

        tracing::debug!(
            "Loaded {} image(s) from {:?}, skipped {}",
            records.len(),
            staging_dir,
            skipped
        );
        Ok(LoadedBatch { records, skipped })
    }

    /// Decode a single staged file, or `None` if it should be skipped.
    fn load_one(&self, path: &Path) -> Option<RgbImage> {
        if !self.is_eligible(path) {
            tracing::warn!("Skipping {:?}: unrecognized extension", path);
            return None;
        }

        let max_bytes = self.config.max_file_size_mb * 1024 * 1024;
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > max_bytes => {
                tracing::warn!(
                    "Skipping {:?}: {}MB exceeds loader.max_file_size_mb",
                    path,
                    meta.len() / (1024 * 1024)
                );
                return None;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("Skipping {:?}: cannot stat ({})", path, e);
                return None;
            }
        }

        // The decode attempt is the authoritative filter: a well-named file
        // with garbage content is skipped here.
        match image::open(path) {
            Ok(decoded) => Some(decoded.to_rgb8()),
            Err(e) => {
                tracing::warn!("Skipping {:?}: not decodable ({})", path, e);
                None
            }
        }
    }

    /// Check if a file has a recognized image extension (case-insensitive).
    fn is_eligible(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext_lower = ext.to_lowercase();
                self.config
                    .supported_formats
                    .iter()
                    .any(|fmt| fmt.to_lowercase() == ext_lower)
            })
            .unwrap_or(false)
    }
}
