//! unpack - extract a ZIP archive and normalize dotted dates in file names.
//!
//! Usage:
//!   unpack -i ARCHIVE.zip -l DIR    Extract into DIR, renaming 2023.1.5 to 2023-01-05
//!   unpack --help                   Show help

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Context, Result};

use tally::{cli, logging};
use tally_core::UnpackConfig;

#[derive(Parser)]
#[command(
    name = "unpack",
    version,
    about = "Extract a ZIP archive and normalize dated file names",
    long_about = "Extracts every entry of the archive into the location, then renames files \
                  whose names contain a YYYY.M.D date so the date reads YYYY-MM-DD."
)]
struct Cli {
    /// ZIP archive to extract
    #[arg(short = 'i', long = "ifile", value_name = "ARCHIVE")]
    archive: PathBuf,

    /// Folder to extract into
    #[arg(short = 'l', long = "location", value_name = "DIR")]
    location: PathBuf,

    /// Increase log verbosity (repeatable)
    #[arg(long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args: Cli = cli::parse_args();
    logging::init(args.verbose);

    let config = match UnpackConfig::builder()
        .archive(args.archive)
        .location(args.location)
        .build()
    {
        Ok(config) => config,
        Err(e) => cli::usage_error::<Cli>(e),
    };

    let report = tally_archive::unpack(&config, |rename| {
        println!(
            "Renaming \"{}\" to \"{}\"...",
            rename.from.display(),
            rename.to.display()
        );
    })
    .with_context(|| format!("Could not unpack {}", config.archive.display()))?;

    println!(
        "{} entries extracted to {}",
        report.entries_extracted,
        report.location.display()
    );

    Ok(())
}
