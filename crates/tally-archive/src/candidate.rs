//! Discovery of `data_<N>.<ext>` files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use tally_core::{ArchiveConfig, ArchiveError, ArchiveWarning, WarningKind};

const CANDIDATE_PREFIX: &str = "data_";

/// A source file whose name follows the `data_<N>.<ext>` pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Full path to the file.
    pub path: PathBuf,
    /// Numeric id embedded in the file name.
    pub id: u64,
}

impl Candidate {
    /// File name of the candidate.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }
}

/// Outcome of matching a file name against the candidate pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameMatch {
    Id(u64),
    /// Digits present but too large for a u64.
    Overflow,
    NoMatch,
}

fn match_name(name: &str, extension: &str) -> NameMatch {
    let Some(rest) = name.strip_prefix(CANDIDATE_PREFIX) else {
        return NameMatch::NoMatch;
    };
    let Some(digits) = rest
        .strip_suffix(extension)
        .and_then(|r| r.strip_suffix('.'))
    else {
        return NameMatch::NoMatch;
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return NameMatch::NoMatch;
    }
    match digits.parse() {
        Ok(id) => NameMatch::Id(id),
        Err(_) => NameMatch::Overflow,
    }
}

/// List candidate files directly inside `source_dir`.
///
/// Non-matching names are ignored. Names whose id overflows and entries
/// that cannot be read are reported as warnings. Candidates are sorted by
/// id, then by name.
pub fn find_candidates(
    source_dir: &Path,
    extension: &str,
) -> Result<(Vec<Candidate>, Vec<ArchiveWarning>), ArchiveError> {
    let metadata = fs::metadata(source_dir).map_err(|e| ArchiveError::io(source_dir, e))?;
    if !metadata.is_dir() {
        return Err(ArchiveError::NotADirectory {
            path: source_dir.to_path_buf(),
        });
    }

    let entries = fs::read_dir(source_dir).map_err(|e| ArchiveError::io(source_dir, e))?;

    let mut candidates = Vec::new();
    let mut warnings = Vec::new();

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                warnings.push(ArchiveWarning::new(
                    source_dir,
                    err.to_string(),
                    WarningKind::ReadError,
                ));
                continue;
            }
        };

        let path = entry.path();
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };

        match match_name(&name, extension) {
            NameMatch::NoMatch => continue,
            NameMatch::Overflow => {
                tracing::warn!(path = %path.display(), "skipping file with oversized id");
                warnings.push(ArchiveWarning::unparseable_id(&path));
            }
            NameMatch::Id(id) => {
                if !path.is_file() {
                    continue;
                }
                tracing::debug!(path = %path.display(), id, "found candidate");
                candidates.push(Candidate { path, id });
            }
        }
    }

    candidates.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.path.cmp(&b.path)));

    Ok((candidates, warnings))
}

/// Keep only the candidates whose id lies in the configured range.
pub fn select_in_range(candidates: Vec<Candidate>, config: &ArchiveConfig) -> Vec<Candidate> {
    candidates
        .into_iter()
        .filter(|c| config.contains(c.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_match_name() {
        assert_eq!(match_name("data_12.csv", "csv"), NameMatch::Id(12));
        assert_eq!(match_name("data_007.csv", "csv"), NameMatch::Id(7));
        assert_eq!(match_name("data_12.txt", "csv"), NameMatch::NoMatch);
        assert_eq!(match_name("data_.csv", "csv"), NameMatch::NoMatch);
        assert_eq!(match_name("data_1a.csv", "csv"), NameMatch::NoMatch);
        assert_eq!(match_name("data_-1.csv", "csv"), NameMatch::NoMatch);
        assert_eq!(match_name("xdata_1.csv", "csv"), NameMatch::NoMatch);
        assert_eq!(match_name("data_1.csv.bak", "csv"), NameMatch::NoMatch);
        assert_eq!(match_name("data_1csv", "csv"), NameMatch::NoMatch);
    }

    #[test]
    fn test_match_name_multi_part_extension() {
        assert_eq!(match_name("data_3.tar.gz", "tar.gz"), NameMatch::Id(3));
        assert_eq!(match_name("data_3.tar.gz", "gz"), NameMatch::NoMatch);
    }

    #[test]
    fn test_match_name_overflow() {
        let name = "data_99999999999999999999999.csv";
        assert_eq!(match_name(name, "csv"), NameMatch::Overflow);
    }

    #[test]
    fn test_find_candidates() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("data_3.csv"), "3").unwrap();
        fs::write(root.join("data_1.csv"), "1").unwrap();
        fs::write(root.join("data_2.txt"), "2").unwrap();
        fs::write(root.join("notes.csv"), "n").unwrap();
        fs::write(root.join("data_99999999999999999999999.csv"), "big").unwrap();
        fs::create_dir(root.join("data_4.csv")).unwrap();

        let (candidates, warnings) = find_candidates(root, "csv").unwrap();

        let ids: Vec<u64> = candidates.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(candidates[0].file_name(), "data_1.csv");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::UnparseableId);
    }

    #[test]
    fn test_find_candidates_missing_dir() {
        let temp = TempDir::new().unwrap();
        let result = find_candidates(&temp.path().join("missing"), "csv");
        assert!(matches!(result, Err(ArchiveError::NotFound { .. })));
    }

    #[test]
    fn test_select_in_range() {
        let candidates = (1..=6)
            .map(|id| Candidate {
                path: PathBuf::from(format!("data/data_{id}.csv")),
                id,
            })
            .collect();
        let config = ArchiveConfig::new(2, 4, "csv");

        let selected = select_in_range(candidates, &config);
        let ids: Vec<u64> = selected.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }
}
