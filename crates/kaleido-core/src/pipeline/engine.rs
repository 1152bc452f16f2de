//! Augmentation engine: pure fan-out of the catalog over loaded images.

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::catalog::Catalog;
use crate::types::{AugmentedOutput, ImageRecord};

/// Applies every catalog entry to every loaded image.
///
/// Pure computation over buffers: no disk I/O happens here. The engine owns
/// the RNG that feeds transform magnitudes, so a seeded engine reproduces a
/// batch bit-for-bit.
pub struct Engine {
    catalog: Catalog,
    rng: StdRng,
    output_extension: String,
}

impl Engine {
    /// Create an engine with an entropy-seeded RNG.
    pub fn new(catalog: Catalog, output_extension: impl Into<String>) -> Self {
        Self {
            catalog,
            rng: StdRng::from_entropy(),
            output_extension: output_extension.into(),
        }
    }

    /// Create an engine with a fixed seed for reproducible magnitudes.
    pub fn with_seed(catalog: Catalog, output_extension: impl Into<String>, seed: u64) -> Self {
        Self {
            catalog,
            rng: StdRng::seed_from_u64(seed),
            output_extension: output_extension.into(),
        }
    }

    /// Number of catalog entries this engine applies per image.
    pub fn transform_count(&self) -> usize {
        self.catalog.len()
    }

    /// Apply the full catalog to every record.
    ///
    /// Returns exactly `records.len() * catalog.len()` outputs: one per
    /// (image, transform) pair, in record order then catalog insertion
    /// order. Output naming is deterministic; pixel content is not.
    pub fn augment(&mut self, records: &[ImageRecord]) -> Vec<AugmentedOutput> {
        let mut outputs = Vec::with_capacity(records.len() * self.catalog.len());
        for record in records {
            outputs.extend(self.augment_one(record));
        }
        outputs
    }

    /// Apply the full catalog to a single record, in catalog order.
    pub fn augment_one(&mut self, record: &ImageRecord) -> Vec<AugmentedOutput> {
        let stem = record.stem();
        let start = std::time::Instant::now();

        let mut outputs = Vec::with_capacity(self.catalog.len());
        for transform in self.catalog.iter() {
            let pixels = transform.apply(&record.pixels, &mut self.rng);
            let file_name = format!("{}_{}.{}", stem, transform.name(), self.output_extension);
            outputs.push(AugmentedOutput {
                source_stem: stem.clone(),
                transform: transform.name().to_string(),
                pixels,
                relative_path: PathBuf::from(&stem).join(file_name),
            });
        }

        tracing::trace!("Augmented {:?} in {:?}", record.source_path, start.elapsed());
        outputs
    }
}
