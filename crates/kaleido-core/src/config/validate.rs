//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.loader.supported_formats.is_empty() {
            return Err(ConfigError::ValidationError(
                "loader.supported_formats must not be empty".into(),
            ));
        }
        if self.loader.max_file_size_mb == 0 {
            return Err(ConfigError::ValidationError(
                "loader.max_file_size_mb must be > 0".into(),
            ));
        }
        if self.encoding.jpeg_quality == 0 || self.encoding.jpeg_quality > 100 {
            return Err(ConfigError::ValidationError(
                "encoding.jpeg_quality must be between 1 and 100".into(),
            ));
        }
        if self.encoding.format.is_empty() {
            return Err(ConfigError::ValidationError(
                "encoding.format must not be empty".into(),
            ));
        }
        // The organizer wipes output_dir wholesale; pointing it at the
        // staging directory would destroy the batch's own inputs.
        if self.storage.staging_dir == self.storage.output_dir {
            return Err(ConfigError::ValidationError(
                "storage.staging_dir and storage.output_dir must differ".into(),
            ));
        }
        Ok(())
    }
}
