//! Data file archiving and ZIP unpacking for tally.
//!
//! Two independent file-system jobs live here:
//!
//! - **Archiving** - copy `data_<N>.<ext>` files whose id lies in an
//!   inclusive range into a dated folder `log/YYYY/MM/DD`
//! - **Unpacking** - extract a ZIP archive and rewrite `YYYY.MM.DD` dates
//!   in file names to `YYYY-MM-DD`
//!
//! # Archiving
//!
//! ```rust,no_run
//! use chrono::Local;
//! use tally_archive::Archiver;
//! use tally_core::ArchiveConfig;
//!
//! let config = ArchiveConfig::new(10, 20, "csv");
//! let report = Archiver::new(config).archive(Local::now().date_naive()).unwrap();
//!
//! println!("Copied {} files into {}", report.copied.len(), report.destination.display());
//! ```
//!
//! # Unpacking
//!
//! ```rust,no_run
//! use tally_archive::unpack;
//! use tally_core::UnpackConfig;
//!
//! let config = UnpackConfig::builder()
//!     .archive("photos.zip")
//!     .location("photos")
//!     .build()
//!     .unwrap();
//! let report = unpack(&config, |rename| {
//!     println!("{} -> {}", rename.from.display(), rename.to.display());
//! })
//! .unwrap();
//!
//! println!("{} entries extracted", report.entries_extracted);
//! ```

mod archiver;
mod candidate;
mod destination;
pub mod unpack;

pub use archiver::{ArchiveReport, Archiver};
pub use candidate::{Candidate, find_candidates, select_in_range};
pub use destination::{dated_destination, ensure_destination};
pub use unpack::{Rename, UnpackReport, dated_name, extract_zip, normalize_dated_names, unpack};

// Re-export core types
pub use tally_core::{ArchiveConfig, ArchiveError, ArchiveWarning, UnpackConfig, UnpackError, WarningKind};
