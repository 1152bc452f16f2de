//! Configuration management for Kaleido.
//!
//! Configuration is loaded from a TOML file with sensible defaults. All
//! config structs implement `Default`, so a missing file means a fully
//! usable default configuration.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for Kaleido.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Staging and output directory locations
    pub storage: StorageConfig,

    /// Image loading settings
    pub loader: LoaderConfig,

    /// Output encoding settings
    pub encoding: EncodingConfig,

    /// Augmentation engine settings
    pub engine: EngineConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.kaleido.kaleido/config.toml
    /// - Linux: ~/.config/kaleido/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\kaleido\config\config.toml
    ///
    /// Falls back to ~/.kaleido/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "kaleido", "kaleido")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".kaleido").join("config.toml")
            })
    }

    /// Get the resolved staging directory path (with ~ expansion).
    pub fn staging_dir(&self) -> PathBuf {
        expand(&self.storage.staging_dir)
    }

    /// Get the resolved output root path (with ~ expansion).
    pub fn output_dir(&self) -> PathBuf {
        expand(&self.storage.output_dir)
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

fn expand(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    let expanded = shellexpand::tilde(&path_str);
    PathBuf::from(expanded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.storage.staging_dir, PathBuf::from("uploads"));
        assert_eq!(config.storage.output_dir, PathBuf::from("augmented"));
        assert_eq!(config.encoding.jpeg_quality, 90);
        assert!(config.engine.seed.is_none());
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[storage]"));
        assert!(toml.contains("[encoding]"));
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = Config::default();
        config.engine.seed = Some(42);
        config.encoding.jpeg_quality = 75;

        let toml = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.engine.seed, Some(42));
        assert_eq!(parsed.encoding.jpeg_quality, 75);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let parsed: Config = toml::from_str("[encoding]\njpeg_quality = 80\n").unwrap();
        assert_eq!(parsed.encoding.jpeg_quality, 80);
        assert_eq!(parsed.storage.staging_dir, PathBuf::from("uploads"));
        assert_eq!(parsed.loader.supported_formats.len(), 3);
    }
}
