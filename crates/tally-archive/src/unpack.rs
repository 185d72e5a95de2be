//! ZIP extraction followed by renaming `YYYY.MM.DD` dates to `YYYY-MM-DD`.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use jwalk::{Parallelism, WalkDir};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use zip::ZipArchive;
use zip::result::ZipError;

use tally_core::{UnpackConfig, UnpackError};

static DOTTED_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{4})\.([0-9]{1,2})\.([0-9]{1,2})").expect("dotted date pattern is valid")
});

/// A file renamed by [`normalize_dated_names`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rename {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Results from an unpack run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnpackReport {
    /// Folder the archive was extracted into.
    pub location: PathBuf,
    /// Number of entries in the archive.
    pub entries_extracted: usize,
    /// Files whose names were rewritten.
    pub renames: Vec<Rename>,
}

/// Extract the archive, then normalize dated file names under the location.
///
/// `on_rename` sees each rename just before it is applied.
pub fn unpack(
    config: &UnpackConfig,
    on_rename: impl FnMut(&Rename),
) -> Result<UnpackReport, UnpackError> {
    let entries_extracted = extract_zip(&config.archive, &config.location)?;
    let renames = normalize_dated_names(&config.location, on_rename)?;
    Ok(UnpackReport {
        location: config.location.clone(),
        entries_extracted,
        renames,
    })
}

/// Extract every entry of a ZIP archive into `location`.
///
/// The location and its parents are created if missing. Returns the number
/// of entries in the archive.
pub fn extract_zip(archive: &Path, location: &Path) -> Result<usize, UnpackError> {
    if !location.is_dir() {
        fs::create_dir_all(location).map_err(|e| UnpackError::io(location, e))?;
    }

    let file = File::open(archive).map_err(|e| UnpackError::io(archive, e))?;
    let mut zip = ZipArchive::new(file).map_err(|e| zip_error(archive, e))?;
    let count = zip.len();

    zip.extract(location).map_err(|e| zip_error(archive, e))?;
    tracing::info!(
        archive = %archive.display(),
        location = %location.display(),
        entries = count,
        "extracted archive"
    );

    Ok(count)
}

fn zip_error(path: &Path, err: ZipError) -> UnpackError {
    match err {
        ZipError::Io(source) => UnpackError::io(path, source),
        other => UnpackError::Zip {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    }
}

/// Rewrite every `YYYY.MM.DD` date in a file name as `YYYY-MM-DD`.
///
/// Each occurrence is rebuilt from its own digits, with month and day
/// zero-padded. Returns `None` when the name has no dotted date or is
/// already normalized.
pub fn dated_name(name: &str) -> Option<String> {
    let renamed = DOTTED_DATE.replace_all(name, |caps: &Captures| {
        let month: u32 = caps[2].parse().unwrap_or_default();
        let day: u32 = caps[3].parse().unwrap_or_default();
        format!("{}-{month:02}-{day:02}", &caps[1])
    });
    (renamed != name).then(|| renamed.into_owned())
}

/// Walk `location` and rename files carrying a dotted date.
///
/// Renames happen after the walk so the traversal never sees its own
/// output. Directories keep their names. `on_rename` is called before each
/// move, including one that then fails.
pub fn normalize_dated_names(
    location: &Path,
    mut on_rename: impl FnMut(&Rename),
) -> Result<Vec<Rename>, UnpackError> {
    let mut planned = Vec::new();

    for entry in WalkDir::new(location)
        .parallelism(Parallelism::Serial)
        .sort(true)
        .skip_hidden(false)
    {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| location.to_path_buf());
            UnpackError::io(path, std::io::Error::other(err.to_string()))
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        if let Some(new_name) = dated_name(&file_name) {
            let from = entry.path();
            let to = from.with_file_name(new_name);
            planned.push(Rename { from, to });
        }
    }

    let mut done = Vec::with_capacity(planned.len());
    for rename in planned {
        on_rename(&rename);
        fs::rename(&rename.from, &rename.to).map_err(|e| UnpackError::io(&rename.from, e))?;
        tracing::info!(from = %rename.from.display(), to = %rename.to.display(), "renamed");
        done.push(rename);
    }

    Ok(done)
}
