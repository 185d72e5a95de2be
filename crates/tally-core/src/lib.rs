//! Core types and configuration records for tally.
//!
//! This crate holds the immutable request records built once from the
//! command line (archive, analysis and unpack requests), the metric
//! catalogue of the text analyzer, and the error/warning types shared by
//! the worker crates.

mod analysis;
mod config;
mod error;

pub use analysis::{
    AnalysisConfig, AnalysisConfigBuilder, AnalysisConfigBuilderError, DEFAULT_FETCH_TIMEOUT,
    InputSource, Metric,
};
pub use config::{
    ArchiveConfig, ArchiveConfigBuilder, ArchiveConfigBuilderError, DEFAULT_LOG_ROOT,
    DEFAULT_SOURCE_DIR, UnpackConfig, UnpackConfigBuilder, UnpackConfigBuilderError,
};
pub use error::{ArchiveError, ArchiveWarning, SourceError, UnpackError, WarningKind};
