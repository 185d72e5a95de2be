//! Archive and unpack request records.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Directory scanned for `data_<N>.<ext>` files when none is given.
pub const DEFAULT_SOURCE_DIR: &str = "data";

/// Root of the dated destination tree when none is given.
pub const DEFAULT_LOG_ROOT: &str = "log";

/// Configuration for an archive run.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ArchiveConfig {
    /// Smallest id to copy (inclusive).
    pub lower: u64,

    /// Largest id to copy (inclusive).
    pub upper: u64,

    /// Extension of the data files, without the leading dot.
    pub extension: String,

    /// Directory holding the data files.
    #[builder(default = "PathBuf::from(DEFAULT_SOURCE_DIR)")]
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Root under which `YYYY/MM/DD` is created.
    #[builder(default = "PathBuf::from(DEFAULT_LOG_ROOT)")]
    #[serde(default = "default_log_root")]
    pub log_root: PathBuf,
}

fn default_source_dir() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE_DIR)
}

fn default_log_root() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_ROOT)
}

impl ArchiveConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref ext) = self.extension {
            if ext.is_empty() {
                return Err("Extension cannot be empty".to_string());
            }
            if ext.contains(['/', '\\']) {
                return Err(format!("Extension cannot contain a path separator: {ext}"));
            }
        }
        if let Some(ref dir) = self.source_dir {
            if dir.as_os_str().is_empty() {
                return Err("Source directory cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

impl ArchiveConfig {
    /// Create a new archive config builder.
    pub fn builder() -> ArchiveConfigBuilder {
        ArchiveConfigBuilder::default()
    }

    /// Create a config with the default source and log directories.
    pub fn new(lower: u64, upper: u64, extension: impl Into<String>) -> Self {
        Self {
            lower,
            upper,
            extension: extension.into(),
            source_dir: default_source_dir(),
            log_root: default_log_root(),
        }
    }

    /// Check whether an id lies in the inclusive archive range.
    ///
    /// An inverted range (`lower > upper`) contains nothing.
    pub fn contains(&self, id: u64) -> bool {
        (self.lower..=self.upper).contains(&id)
    }
}

/// Configuration for extracting a ZIP archive and normalizing dated names.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct UnpackConfig {
    /// ZIP file to extract.
    pub archive: PathBuf,

    /// Folder to extract into (created if missing).
    pub location: PathBuf,
}

impl UnpackConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref archive) = self.archive {
            if archive.as_os_str().is_empty() {
                return Err("Archive path cannot be empty".to_string());
            }
        }
        if let Some(ref location) = self.location {
            if location.as_os_str().is_empty() {
                return Err("Extract location cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

impl UnpackConfig {
    /// Create a new unpack config builder.
    pub fn builder() -> UnpackConfigBuilder {
        UnpackConfigBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ArchiveConfig::builder()
            .lower(3u64)
            .upper(7u64)
            .extension("csv")
            .build()
            .unwrap();

        assert_eq!(config.lower, 3);
        assert_eq!(config.upper, 7);
        assert_eq!(config.extension, "csv");
        assert_eq!(config.source_dir, PathBuf::from("data"));
        assert_eq!(config.log_root, PathBuf::from("log"));
    }

    #[test]
    fn test_config_builder_requires_bounds() {
        let result = ArchiveConfig::builder().extension("csv").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_config_builder_accepts_inverted_range() {
        let config = ArchiveConfig::builder()
            .lower(9u64)
            .upper(2u64)
            .extension("csv")
            .build()
            .unwrap();
        assert!((0..=20).all(|id| !config.contains(id)));
    }

    #[test]
    fn test_config_builder_rejects_bad_extension() {
        assert!(ArchiveConfig::builder().lower(1u64).upper(2u64).extension("").build().is_err());
        assert!(
            ArchiveConfig::builder()
                .lower(1u64)
                .upper(2u64)
                .extension("../txt")
                .build()
                .is_err()
        );
    }

    #[test]
    fn test_contains_is_inclusive() {
        let config = ArchiveConfig::new(10, 12, "txt");
        assert!(!config.contains(9));
        assert!(config.contains(10));
        assert!(config.contains(11));
        assert!(config.contains(12));
        assert!(!config.contains(13));
    }

    #[test]
    fn test_unpack_config_builder() {
        let config = UnpackConfig::builder()
            .archive("photos.zip")
            .location("out")
            .build()
            .unwrap();
        assert_eq!(config.archive, PathBuf::from("photos.zip"));
        assert_eq!(config.location, PathBuf::from("out"));

        assert!(UnpackConfig::builder().archive("photos.zip").build().is_err());
    }
}
