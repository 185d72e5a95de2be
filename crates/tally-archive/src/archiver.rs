//! Copy of in-range data files into the dated destination.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tally_core::{ArchiveConfig, ArchiveError, ArchiveWarning, WarningKind};

use crate::candidate::{Candidate, find_candidates, select_in_range};
use crate::destination::{dated_destination, ensure_destination};

/// Results from an archive run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveReport {
    /// Folder the files were copied into.
    pub destination: PathBuf,

    /// Destination paths of the copied files, in id order.
    pub copied: Vec<PathBuf>,

    /// Total bytes copied.
    pub bytes_copied: u64,

    /// Number of `data_<N>.<ext>` files seen in the source directory.
    pub candidates_seen: usize,

    /// Non-fatal problems (skipped files, failed copies, empty selection).
    pub warnings: Vec<ArchiveWarning>,
}

impl ArchiveReport {
    /// Check if any file was copied.
    pub fn has_copies(&self) -> bool {
        !self.copied.is_empty()
    }

    /// Number of copies that failed.
    pub fn failed_count(&self) -> usize {
        self.warnings
            .iter()
            .filter(|w| w.kind == WarningKind::CopyFailed)
            .count()
    }
}

/// Copies `data_<N>.<ext>` files within an id range into `log/YYYY/MM/DD`.
pub struct Archiver {
    config: ArchiveConfig,
}

impl Archiver {
    /// Create an archiver for a request.
    pub fn new(config: ArchiveConfig) -> Self {
        Self { config }
    }

    /// Destination folder for a given day.
    pub fn destination_for(&self, date: NaiveDate) -> PathBuf {
        dated_destination(&self.config.log_root, date)
    }

    /// Run the archive for the given day.
    ///
    /// The destination is created before the source directory is read, so
    /// a run that matches nothing still leaves the dated folder behind.
    /// Existing copies are overwritten.
    pub fn archive(&self, date: NaiveDate) -> Result<ArchiveReport, ArchiveError> {
        let destination = self.destination_for(date);
        ensure_destination(&destination)?;

        let (candidates, mut warnings) =
            find_candidates(&self.config.source_dir, &self.config.extension)?;
        let candidates_seen = candidates.len();
        let selected = select_in_range(candidates, &self.config);

        tracing::debug!(
            seen = candidates_seen,
            selected = selected.len(),
            lower = self.config.lower,
            upper = self.config.upper,
            "selected candidates"
        );

        if selected.is_empty() {
            tracing::warn!(
                source = %self.config.source_dir.display(),
                lower = self.config.lower,
                upper = self.config.upper,
                "no files matched the requested range"
            );
            warnings.push(ArchiveWarning::no_matches(
                &self.config.source_dir,
                self.config.lower,
                self.config.upper,
            ));
        }

        let mut copied = Vec::with_capacity(selected.len());
        let mut bytes_copied = 0u64;

        for candidate in selected {
            match copy_candidate(&candidate, &destination) {
                Ok((dest_path, bytes)) => {
                    tracing::info!(
                        source = %candidate.path.display(),
                        dest = %dest_path.display(),
                        bytes,
                        "copied"
                    );
                    bytes_copied += bytes;
                    copied.push(dest_path);
                }
                Err(e) => {
                    tracing::warn!(source = %candidate.path.display(), error = %e, "copy failed");
                    warnings.push(ArchiveWarning::copy_failed(&candidate.path, &e));
                }
            }
        }

        Ok(ArchiveReport {
            destination,
            copied,
            bytes_copied,
            candidates_seen,
            warnings,
        })
    }
}

/// Copy a single candidate into the destination, keeping its file name.
fn copy_candidate(candidate: &Candidate, destination: &Path) -> std::io::Result<(PathBuf, u64)> {
    let dest_path = destination.join(candidate.file_name());
    let bytes = fs::copy(&candidate.path, &dest_path)?;
    Ok((dest_path, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_in(root: &Path, lower: u64, upper: u64) -> ArchiveConfig {
        ArchiveConfig::builder()
            .lower(lower)
            .upper(upper)
            .extension("log")
            .source_dir(root.join("data"))
            .log_root(root.join("log"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_copy_candidate_overwrites() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("data_1.log");
        let dest = temp.path().join("out");
        fs::create_dir(&dest).unwrap();
        fs::write(&src, "new").unwrap();
        fs::write(dest.join("data_1.log"), "old contents").unwrap();

        let candidate = Candidate { path: src, id: 1 };
        let (path, bytes) = copy_candidate(&candidate, &dest).unwrap();

        assert_eq!(bytes, 3);
        assert_eq!(fs::read_to_string(path).unwrap(), "new");
    }

    #[test]
    fn test_empty_selection_still_creates_destination() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("data")).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

        let archiver = Archiver::new(config_in(temp.path(), 1, 5));
        let report = archiver.archive(date).unwrap();

        assert!(!report.has_copies());
        assert!(report.destination.is_dir());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].kind, WarningKind::NoMatches);
        assert_eq!(report.failed_count(), 0);
    }
}
