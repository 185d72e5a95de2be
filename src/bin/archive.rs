//! archive - copy numbered data files into a dated log folder.
//!
//! Usage:
//!   archive -l LOWER -u UPPER -e EXT    Copy data/data_<N>.<EXT> for LOWER <= N <= UPPER
//!   archive --help                      Show help

use std::path::PathBuf;

use chrono::Local;
use clap::{ArgAction, Parser};
use color_eyre::eyre::{Context, Result, eyre};

use tally::{cli, logging};
use tally_archive::Archiver;
use tally_core::{ArchiveConfig, DEFAULT_LOG_ROOT, DEFAULT_SOURCE_DIR};

#[derive(Parser)]
#[command(
    name = "archive",
    version,
    about = "Copy numbered data files into a dated log folder",
    long_about = "Copies every data_<N>.<EXT> file in the source directory whose id N lies \
                  in [LOWER, UPPER] into log/YYYY/MM/DD for today's date.\n\n\
                  The destination is created if missing and existing copies are overwritten, \
                  so reruns are safe."
)]
struct Cli {
    /// Lowest id to copy (inclusive)
    #[arg(short = 'l', long = "lower", value_name = "LOWER")]
    lower: u64,

    /// Highest id to copy (inclusive)
    #[arg(short = 'u', long = "upper", value_name = "UPPER")]
    upper: u64,

    /// Extension of the data files, without the dot
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    ext: String,

    /// Directory holding the data files
    #[arg(long, value_name = "DIR", default_value = DEFAULT_SOURCE_DIR)]
    source_dir: PathBuf,

    /// Root of the dated destination tree
    #[arg(long, value_name = "DIR", default_value = DEFAULT_LOG_ROOT)]
    log_root: PathBuf,

    /// Increase log verbosity (repeatable)
    #[arg(long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args: Cli = cli::parse_args();
    logging::init(args.verbose);

    let (lower, upper) = (args.lower, args.upper);
    let config = match ArchiveConfig::builder()
        .lower(args.lower)
        .upper(args.upper)
        .extension(args.ext)
        .source_dir(args.source_dir)
        .log_root(args.log_root)
        .build()
    {
        Ok(config) => config,
        Err(e) => cli::usage_error::<Cli>(e),
    };

    let archiver = Archiver::new(config);
    let report = archiver
        .archive(Local::now().date_naive())
        .context("Archive failed")?;

    for path in &report.copied {
        println!("Copied {}", path.display());
    }

    if report.has_copies() {
        println!(
            "{} file(s), {} copied to {}",
            report.copied.len(),
            humansize::format_size(report.bytes_copied, humansize::BINARY),
            report.destination.display()
        );
    } else if report.failed_count() == 0 {
        println!(
            "No files matched ids {lower} to {upper}; nothing copied to {}",
            report.destination.display()
        );
    }

    let failed = report.failed_count();
    if failed > 0 {
        return Err(eyre!(
            "{failed} file(s) failed to copy into {}",
            report.destination.display()
        ));
    }

    Ok(())
}
