//! Dated destination folders.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};

use tally_core::ArchiveError;

/// Build `log_root/YYYY/MM/DD` for a date, zero-padding month and day.
pub fn dated_destination(log_root: &Path, date: NaiveDate) -> PathBuf {
    log_root
        .join(format!("{:04}", date.year()))
        .join(format!("{:02}", date.month()))
        .join(format!("{:02}", date.day()))
}

/// Create the destination and any missing parents.
///
/// Succeeds when the directory already exists.
pub fn ensure_destination(path: &Path) -> Result<(), ArchiveError> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|e| ArchiveError::io(path, e))?;
    tracing::info!(destination = %path.display(), "created destination");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_dated_destination_pads_month_and_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let path = dated_destination(Path::new("log"), date);
        assert_eq!(path, PathBuf::from("log").join("2024").join("03").join("07"));
    }

    #[test]
    fn test_ensure_destination_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let dest = dated_destination(temp.path(), date);

        ensure_destination(&dest).unwrap();
        assert!(dest.is_dir());

        ensure_destination(&dest).unwrap();
        assert!(dest.is_dir());
    }

    #[test]
    fn test_ensure_destination_fails_under_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("log");
        fs::write(&blocker, "not a directory").unwrap();

        let result = ensure_destination(&blocker.join("2025"));
        assert!(result.is_err());
    }
}
