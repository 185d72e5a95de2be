//! Acquisition of the text to analyze.
//!
//! A file is read directly, standard input is read to end-of-stream, and a
//! URL is downloaded into a [`Spool`] first. The spool is a named temporary
//! file deleted on drop; the [`Document`] owns it, so it lives exactly as
//! long as the text being analyzed.

use std::fs;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::time::Duration;

use tempfile::NamedTempFile;

use tally_core::{AnalysisConfig, InputSource, SourceError};

const SPOOL_PREFIX: &str = "tally-fetch-";

/// Text loaded from an input source.
#[derive(Debug)]
pub struct Document {
    text: String,
    spool: Option<Spool>,
}

impl Document {
    /// Wrap already-loaded text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spool: None,
        }
    }

    /// The full text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Path of the backing download, if the text came from a URL.
    pub fn spool_path(&self) -> Option<&Path> {
        self.spool.as_ref().map(Spool::path)
    }
}

/// Temporary file holding a downloaded body; removed on drop.
#[derive(Debug)]
pub struct Spool {
    file: NamedTempFile,
}

impl Spool {
    /// Create an empty spool file in the system temp directory.
    pub fn new() -> io::Result<Self> {
        let file = tempfile::Builder::new()
            .prefix(SPOOL_PREFIX)
            .suffix(".txt")
            .tempfile()?;
        Ok(Self { file })
    }

    /// Location of the spool file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Copy a reader into the spool, returning the number of bytes written.
    pub fn fill_from(&mut self, reader: &mut impl Read) -> io::Result<u64> {
        let written = io::copy(reader, self.file.as_file_mut())?;
        self.file.as_file_mut().flush()?;
        Ok(written)
    }

    /// Read the spooled bytes back as text, replacing invalid UTF-8.
    pub fn read_text(&mut self) -> io::Result<String> {
        let file = self.file.as_file_mut();
        file.seek(SeekFrom::Start(0))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        Ok(decode(bytes))
    }
}

fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// Load the configured input, reading standard input when no file or URL
/// was given.
pub fn acquire(config: &AnalysisConfig) -> Result<Document, SourceError> {
    match &config.source {
        InputSource::File(path) => read_file(path),
        InputSource::Url(url) => fetch(url, config.fetch_timeout),
        InputSource::Stdin => read_stream(io::stdin().lock()),
    }
}

/// Read a local file.
pub fn read_file(path: &Path) -> Result<Document, SourceError> {
    let bytes = fs::read(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read input file");
    Ok(Document::from_text(decode(bytes)))
}

/// Read a stream to its end.
pub fn read_stream(mut reader: impl Read) -> Result<Document, SourceError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(SourceError::Stdin)?;
    tracing::debug!(bytes = bytes.len(), "read standard input");
    Ok(Document::from_text(decode(bytes)))
}

/// Load a filled spool back as a document that keeps the file alive.
fn spooled_document(mut spool: Spool) -> Result<Document, SourceError> {
    let text = spool.read_text().map_err(SourceError::Spool)?;
    Ok(Document {
        text,
        spool: Some(spool),
    })
}

/// Download a URL with HTTP GET into a spool file.
///
/// Connection failures, timeouts and non-success statuses are all errors.
pub fn fetch(url: &str, timeout: Duration) -> Result<Document, SourceError> {
    let fetch_error = |e: reqwest::Error| SourceError::Fetch {
        url: url.to_string(),
        message: e.to_string(),
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(fetch_error)?;

    tracing::info!(url, timeout_secs = timeout.as_secs(), "fetching");
    let mut response = client.get(url).send().map_err(fetch_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let mut spool = Spool::new().map_err(SourceError::Spool)?;
    let bytes = spool
        .fill_from(&mut response)
        .map_err(|e| SourceError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        })?;
    tracing::debug!(url, bytes, spool = %spool.path().display(), "spooled response");

    spooled_document(spool)
}
