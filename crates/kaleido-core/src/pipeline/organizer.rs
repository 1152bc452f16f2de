//! Output organizer: materializes augmented buffers into the output tree.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;

use crate::config::EncodingConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::types::AugmentedOutput;

/// Writes a batch's outputs under a single root, wipe-then-write.
///
/// The entire pre-existing tree is destroyed before the first file of the
/// new batch lands, so stale outputs never leak into a fresh batch. Any
/// filesystem or encode failure aborts the batch; a partial tree is never
/// reported as complete.
pub struct Organizer {
    root: PathBuf,
    encoding: EncodingConfig,
}

impl Organizer {
    /// Create an organizer rooted at `root`.
    pub fn new(root: impl Into<PathBuf>, encoding: EncodingConfig) -> Self {
        Self {
            root: root.into(),
            encoding,
        }
    }

    /// The output root this organizer writes under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Replace the output tree with this batch's outputs.
    ///
    /// Returns the number of files written, which equals `outputs.len()`
    /// on success.
    pub fn write_batch(&self, outputs: &[AugmentedOutput]) -> PipelineResult<usize> {
        self.wipe()?;

        let mut written = 0;
        for output in outputs {
            let path = self.root.join(&output.relative_path);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| PipelineError::OutputIo {
                    path: parent.to_path_buf(),
                    message: e.to_string(),
                })?;
            }
            self.encode_to(&path, output)?;
            written += 1;
        }

        tracing::debug!("Wrote {} file(s) under {:?}", written, self.root);
        Ok(written)
    }

    /// Destroy any previous output tree and recreate the empty root.
    fn wipe(&self) -> PipelineResult<()> {
        if self.root.exists() {
            std::fs::remove_dir_all(&self.root).map_err(|e| PipelineError::OutputIo {
                path: self.root.clone(),
                message: format!("cannot wipe previous outputs: {}", e),
            })?;
        }
        std::fs::create_dir_all(&self.root).map_err(|e| PipelineError::OutputIo {
            path: self.root.clone(),
            message: e.to_string(),
        })
    }

    /// Encode one augmented buffer to disk as JPEG at the configured quality.
    fn encode_to(&self, path: &Path, output: &AugmentedOutput) -> PipelineResult<()> {
        let file = File::create(path).map_err(|e| PipelineError::OutputIo {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut writer = BufWriter::new(file);
        let encoder = JpegEncoder::new_with_quality(&mut writer, self.encoding.jpeg_quality);
        output
            .pixels
            .write_with_encoder(encoder)
            .map_err(|e| PipelineError::Encode {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn output(stem: &str, transform: &str) -> AugmentedOutput {
        AugmentedOutput {
            source_stem: stem.to_string(),
            transform: transform.to_string(),
            pixels: RgbImage::from_pixel(6, 4, Rgb([200, 100, 50])),
            relative_path: PathBuf::from(stem).join(format!("{}_{}.jpg", stem, transform)),
        }
    }

    #[test]
    fn test_write_batch_creates_layout() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("out");
        let organizer = Organizer::new(&root, EncodingConfig::default());

        let outputs = vec![
            output("a", "rotate"),
            output("a", "hflip"),
            output("b", "rotate"),
        ];
        let written = organizer.write_batch(&outputs).unwrap();

        assert_eq!(written, 3);
        assert!(root.join("a").join("a_rotate.jpg").is_file());
        assert!(root.join("a").join("a_hflip.jpg").is_file());
        assert!(root.join("b").join("b_rotate.jpg").is_file());
    }

    #[test]
    fn test_written_files_decode_as_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("out");
        let organizer = Organizer::new(&root, EncodingConfig::default());

        organizer.write_batch(&[output("a", "rotate")]).unwrap();

        let decoded = image::open(root.join("a").join("a_rotate.jpg")).unwrap();
        assert_eq!(decoded.to_rgb8().dimensions(), (6, 4));
    }

    #[test]
    fn test_wipe_removes_previous_batch() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("out");
        let organizer = Organizer::new(&root, EncodingConfig::default());

        organizer.write_batch(&[output("old", "rotate")]).unwrap();
        assert!(root.join("old").exists());

        organizer.write_batch(&[output("new", "rotate")]).unwrap();
        assert!(!root.join("old").exists());
        assert!(root.join("new").join("new_rotate.jpg").is_file());
    }

    #[test]
    fn test_empty_batch_leaves_empty_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("out");
        let organizer = Organizer::new(&root, EncodingConfig::default());

        let written = organizer.write_batch(&[]).unwrap();
        assert_eq!(written, 0);
        assert!(root.is_dir());
        assert_eq!(std::fs::read_dir(&root).unwrap().count(), 0);
    }
}
